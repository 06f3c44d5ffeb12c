//! Request/response types for the external circuit simulator.
//!
//! Simulation itself happens in a separate service: the editor sends
//! emitted netlist text plus a per-input stimulus and a step count, and
//! gets back one bit sequence per signal. This module only defines that
//! boundary as serde value types - no transport, no execution.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{NetgridError, Result};

/// Default number of simulation steps.
pub const DEFAULT_STEPS: u32 = 16;

/// A simulation request: netlist text, stimulus, and step count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulateRequest {
    /// Netlist text, as produced by [`crate::emit_netlist`].
    pub netlist: String,
    /// Per-input stimulus: signal name to a bit string such as `"0101"`.
    /// Signals without a stimulus are left to the simulator's defaults.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub inputs: HashMap<String, String>,
    /// Number of time steps to simulate.
    #[serde(default = "default_steps")]
    pub steps: u32,
}

fn default_steps() -> u32 {
    DEFAULT_STEPS
}

impl SimulateRequest {
    /// Create a request with no stimulus.
    pub fn new(netlist: impl Into<String>, steps: u32) -> Self {
        Self {
            netlist: netlist.into(),
            inputs: HashMap::new(),
            steps,
        }
    }

    /// Attach a bit-string stimulus for one input signal.
    ///
    /// Rejects anything but `0` and `1` characters; a malformed stimulus is
    /// a caller bug, not something to ship to the simulator.
    pub fn with_stimulus(mut self, signal: impl Into<String>, bits: &str) -> Result<Self> {
        let signal = signal.into();
        if let Some(bad) = bits.chars().find(|c| *c != '0' && *c != '1') {
            return Err(NetgridError::invalid_stimulus(
                signal,
                format!("unexpected character '{bad}'"),
            ));
        }
        self.inputs.insert(signal, bits.to_string());
        Ok(self)
    }
}

/// A simulation response: one bit sequence per signal, each of length
/// `steps`. Consumed by the waveform viewer, opaque to the translator.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimulateResponse {
    /// Signal name to per-step bit values.
    pub signals: HashMap<String, Vec<u8>>,
}
