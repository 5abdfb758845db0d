pub mod descriptor;
pub mod loader;
pub mod parser;
pub mod table;

pub use descriptor::{
    ClientsSelector, DescriptorBuilder, Directive, NewsSelector, OfficeSelector, SiteDescriptor, TextSelector,
};
pub use loader::{ConfigLoader, ConfigLoaderBuilder};
pub use parser::ConfigParser;
pub use table::SiteTable;
