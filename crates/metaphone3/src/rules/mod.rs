//! Per-letter consonant rules.
//!
//! Each submodule adds handlers to [`Pass`](crate::pass::Pass); grouping
//! follows place of articulation where letters share context checks.

mod b;
mod c;
mod dental;
mod glide;
mod j;
mod k;
mod labial;
mod liquid;
mod sibilant;
mod velar;
