use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;
use crate::gateway::events::EventPublisher;
use crate::gateway::logs::publisher::LogPublisher;
use crate::gateway::metadata::MetadataLookup;
use crate::gateway::openlibrary::lookup::OpenLibraryLookup;

pub(crate) fn create_publisher() -> Box<dyn EventPublisher> {
    Box::new(LogPublisher::new())
}

pub(crate) fn create_metadata_lookup(config: &Configuration) -> LibraryResult<Box<dyn MetadataLookup>> {
    let lookup = OpenLibraryLookup::new(config.metadata_url.as_str(), config.lookup_timeout())?;
    Ok(Box::new(lookup))
}
