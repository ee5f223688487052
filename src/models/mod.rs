pub mod conditions;
pub mod decision;
pub mod sensor;
pub mod weather;

pub use conditions::*;
pub use decision::*;
pub use sensor::*;
pub use weather::*;
