mod textarea;

pub use textarea::*;
