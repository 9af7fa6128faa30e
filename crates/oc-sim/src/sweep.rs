//! Independent runs over many parameter sets.
//!
//! Each run is single-threaded and fully determined by its own parameters.
//! With the `parallel` feature the runs themselves are spread over Rayon's
//! thread pool; results come back in input order either way.

use oc_core::SimParams;
use oc_grid::Layout;

use crate::{SimOutput, SimResult, run_simulation};

/// Run every parameter set on `layout`.
pub fn run_sweep(param_sets: &[SimParams], layout: &Layout) -> Vec<SimResult<SimOutput>> {
    log::info!("sweeping {} parameter sets", param_sets.len());

    #[cfg(not(feature = "parallel"))]
    {
        param_sets.iter().map(|p| run_simulation(p, layout)).collect()
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        param_sets.par_iter().map(|p| run_simulation(p, layout)).collect()
    }
}
