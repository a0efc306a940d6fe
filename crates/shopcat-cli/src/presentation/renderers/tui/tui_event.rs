use shopcat_runtime::{LoadError, LoadTicket, LoadedCatalog};

/// Messages from background work to the event loop
#[derive(Debug)]
pub enum TuiEvent {
    LoadFinished(LoadTicket, Result<LoadedCatalog, LoadError>),
}
