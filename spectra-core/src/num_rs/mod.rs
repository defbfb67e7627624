mod correlate;
mod fftfreq;
mod linspace;

pub use correlate::*;
pub use fftfreq::*;
pub use linspace::*;
