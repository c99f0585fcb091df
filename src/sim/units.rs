pub(crate) type Float = f64;
pub(crate) const DIMENSIONALITY: usize = 2;

pub(crate) type Vector = [Float; DIMENSIONALITY];

// m^3 kg^-1 s^-2
pub(crate) const G: Float = 6.67428e-11;
pub(crate) const AU: Float = 149.6e6 * 1000.;
// One simulated day per step
pub(crate) const TIME_STEP: Float = 3600. * 24.;

pub(crate) const KM: Float = 1000.;
