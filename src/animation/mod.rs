pub(crate) mod choreography;
pub(crate) mod ease;
pub(crate) mod reveal;
