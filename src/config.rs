/// Processor behaviour switches.
#[derive(Clone, Debug, Default)]
pub struct Config {
    /// Make taken branches and jumps transfer immediately instead of after
    /// the delay slot.
    pub disable_delay_slots: bool,
}
