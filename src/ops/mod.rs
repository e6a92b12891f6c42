pub mod controller;
pub mod replay;
pub mod windower;

pub use controller::MruController;
