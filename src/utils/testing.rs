use std::net::TcpListener;
use axum::Router;

// serves the router on an ephemeral local port and returns its base url
pub(crate) async fn serve(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("should bind test listener");
    let addr = listener.local_addr().expect("should have local addr");
    let server = axum::Server::from_tcp(listener).expect("should build test server")
        .serve(app.into_make_service());
    tokio::spawn(async move {
        let _ = server.await;
    });
    format!("http://{}", addr)
}

// a base url nothing listens on
pub(crate) fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("should bind test listener");
    let addr = listener.local_addr().expect("should have local addr");
    drop(listener);
    format!("http://{}", addr)
}
