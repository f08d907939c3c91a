//! Rotating physics trivia shown on the dashboard.

use rand::seq::SliceRandom;

use crate::notify::Severity;
use crate::portal::Portal;

pub const PHYSICS_FACTS: [&str; 15] = [
    "Light from the Sun takes about 8 minutes and 20 seconds to reach Earth.",
    "A teaspoonful of neutron star material would weigh about 6 billion tons.",
    "Sound travels roughly 4.3 times faster in water than in air.",
    "Absolute zero is -273.15°C, the point where classical molecular motion stops.",
    "A photon can take thousands of years to escape the Sun's core, then 8 minutes to reach us.",
    "Time passes slightly faster at the top of a mountain than at sea level.",
    "Lightning heats the surrounding air to about 30,000 K, five times hotter than the Sun's surface.",
    "If you could fold a paper 42 times, it would reach the Moon.",
    "Helium becomes a superfluid near absolute zero and can climb up container walls.",
    "The observable universe is about 93 billion light-years across.",
    "Electrons do not orbit the nucleus like planets; they exist as probability clouds.",
    "Water expands by about 9% when it freezes, which is why ice floats.",
    "A day on Venus is longer than its year.",
    "Atoms are over 99.9999% empty space.",
    "GPS satellites must correct for relativity or drift by kilometers per day.",
];

/// One fact, uniformly at random.
pub fn random_fact() -> &'static str {
    PHYSICS_FACTS
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(PHYSICS_FACTS[0])
}

impl Portal {
    /// Show a random fact as a toast.
    pub fn show_physics_fact(&self) -> &'static str {
        let fact = random_fact();
        self.notify(fact, Severity::Info);
        fact
    }
}
