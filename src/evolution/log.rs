/// One line of the evolution log.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogLine {
    /// Generation number, starting at 1.
    pub gen: usize,
    /// Fitness evaluations made since the start of the `evolve` call.
    pub fevals: u64,
    /// Best fitness seen since the start of the `evolve` call.
    pub best: f64,
    /// Best fitness in the current population.
    pub current_best: f64,
}
