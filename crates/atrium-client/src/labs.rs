//! The virtual lab: curated external physics simulations.

use crate::notify::Severity;
use crate::portal::Portal;

pub struct Simulation {
    pub key: &'static str,
    pub title: &'static str,
    pub url: &'static str,
}

/// The curated simulation catalog, keyed by the experiment card name.
pub const SIMULATIONS: [Simulation; 4] = [
    Simulation {
        key: "pendulum",
        title: "Pendulum Lab",
        url: "https://phet.colorado.edu/sims/html/pendulum-lab/latest/pendulum-lab_en.html",
    },
    Simulation {
        key: "circuit",
        title: "Circuit Construction Kit",
        url: "https://phet.colorado.edu/sims/html/circuit-construction-kit-dc/latest/circuit-construction-kit-dc_en.html",
    },
    Simulation {
        key: "optics",
        title: "Bending Light",
        url: "https://phet.colorado.edu/sims/html/bending-light/latest/bending-light_en.html",
    },
    Simulation {
        key: "thermo",
        title: "States of Matter",
        url: "https://phet.colorado.edu/sims/html/states-of-matter/latest/states-of-matter_en.html",
    },
];

pub fn simulation(key: &str) -> Option<&'static Simulation> {
    SIMULATIONS.iter().find(|s| s.key == key)
}

impl Portal {
    /// Resolve an experiment card to its simulation URL; the frontend opens
    /// it in the system browser.
    pub fn open_simulation(&self, key: &str) -> Option<&'static str> {
        match simulation(key) {
            Some(sim) => {
                self.notify(&format!("Loading {}... ⚗️", sim.title), Severity::Info);
                Some(sim.url)
            }
            None => {
                tracing::warn!(key, "unknown simulation requested");
                self.notify("Simulation not available", Severity::Warning);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use atrium_store::{MemoryAuth, MemoryStore};

    use crate::events::test_support::RecordingSink;
    use crate::events::EVENT_NOTIFICATION;

    #[test]
    fn known_keys_resolve_to_phet_urls() {
        for key in ["pendulum", "circuit", "optics", "thermo"] {
            let sim = simulation(key).unwrap();
            assert!(sim.url.starts_with("https://phet.colorado.edu/"));
        }
        assert!(simulation("biology").is_none());
    }

    #[test]
    fn opening_a_simulation_announces_it() {
        let sink = Arc::new(RecordingSink::new());
        let portal = Portal::new(
            Arc::new(MemoryAuth::new()),
            Arc::new(MemoryStore::new()),
            sink.clone(),
        );

        let url = portal.open_simulation("pendulum").unwrap();
        assert!(url.contains("pendulum-lab"));
        let toast = sink.last(EVENT_NOTIFICATION).unwrap();
        assert_eq!(toast["message"], "Loading Pendulum Lab... ⚗️");
        assert_eq!(toast["severity"], "info");

        assert!(portal.open_simulation("nope").is_none());
        let toast = sink.last(EVENT_NOTIFICATION).unwrap();
        assert_eq!(toast["severity"], "warning");
    }
}
