pub mod asof;
pub mod ramp;
pub mod resample;
pub mod share;
pub mod window;

pub use asof::{row_asof, Row};
pub use ramp::{argmax_abs, max_ramp, ramp, RampPeak};
pub use resample::{monthly_mean, yearly_mean, Resampled};
pub use share::{mix_shares, row_sum, share_of_total, ShareSeries};
pub use window::clip;
