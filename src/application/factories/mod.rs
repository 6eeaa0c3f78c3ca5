mod formatter_factory;
mod index_source_factory;
mod presenter_factory;

pub use formatter_factory::{FormatterFactory, FormatterType};
pub use index_source_factory::IndexSourceFactory;
pub use presenter_factory::{PresenterFactory, PresenterType};
