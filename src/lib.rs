//! Transfer-curve analysis for organic electrochemical transistors.
//!
//! Takes one gate-voltage / drain-current sweep, splits it into forward
//! and reverse legs at the voltage peak, and extracts the figures of merit
//! a characterization script reads off a transfer curve: transconductance
//! (raw and per leg), its peak, the extremal currents and the turn-on
//! voltage located at the extreme slope of log10 current. Loading the data
//! and plotting the results are the caller's job.
//!
//! ```
//! use oect_transfer::{DeviceType, Transfer};
//!
//! let vg = [0.0, 0.2, 0.4, 0.6, 0.4, 0.2, 0.0];
//! let id = [1e-9, 1e-7, 1e-5, 1e-4, 2e-5, 5e-7, 2e-9];
//! let transfer = Transfer::new(&vg, &id, DeviceType::N)?;
//! assert_eq!(transfer.gm.raw.len(), vg.len() - 1);
//! println!("Von = {} V on the {:?} leg", transfer.von.raw, transfer.von.leg);
//! # Ok::<(), oect_transfer::TransferError>(())
//! ```

pub mod diff;
pub mod error;
pub mod point;
pub mod sequence;
pub mod sweep;
pub mod threshold;
pub mod transfer;

pub use diff::{differentiate, DX_EPSILON};
pub use error::TransferError;
pub use point::{Point, SweepLeg};
pub use sequence::Sequence;
pub use sweep::split_index;
pub use threshold::{DeviceType, LOG_CURRENT_FLOOR};
pub use transfer::Transfer;
