//! Delay solver: capacity estimate, outer-loop search, resize on exhaustion

use crate::capacity::required_registers;
use crate::cost::evaluate;
use crate::search::search_outer_repeats;
use sdelay_spec::{DelayError, DelayRequest, LoopConfiguration, LoopCost, Result, SolverConfig};

/// A sized delay loop and its exact cost
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    pub request: DelayRequest,
    pub configuration: LoopConfiguration,
    pub cost: LoopCost,
    /// Register count the capacity estimate suggested
    pub seed_register_count: u8,
}

impl Solution {
    /// Whether the final register count differs from the estimate
    pub fn resized(&self) -> bool {
        self.configuration.register_count() != self.seed_register_count
    }

    /// Seconds the loop overshoots the requested delay by
    pub fn overshoot_seconds(&self) -> f64 {
        self.cost.elapsed_seconds - self.request.target_seconds()
    }
}

/// Delay solver
#[derive(Debug, Clone, Copy, Default)]
pub struct Solver {
    config: SolverConfig,
}

impl Solver {
    /// Create a solver, validating its configuration
    pub fn new(config: SolverConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Size the loop for `request`
    pub fn solve(&self, request: &DelayRequest) -> Result<Solution> {
        let dummy = request.dummy_instruction_count();
        let seed = required_registers(dummy, &self.config)
            .ok_or_else(|| self.unrepresentable(request))?;

        tracing::debug!(dummy_instructions = dummy, seed, "capacity estimate");

        let mut register_count = seed;
        let mut outer_repeats = loop {
            match search_outer_repeats(register_count, request) {
                Ok(outer) => break outer,
                Err(e) if e.is_recoverable() => {
                    if register_count >= self.config.max_registers {
                        return Err(self.unrepresentable(request));
                    }
                    tracing::warn!(
                        register_count,
                        "outer loop exceeds 256 repeats, adding a register"
                    );
                    register_count += 1;
                }
                Err(e) => return Err(e),
            }
        };

        // The estimate can over-size by a register at bucket edges
        while register_count > 1 {
            match search_outer_repeats(register_count - 1, request) {
                Ok(outer) => {
                    tracing::debug!(
                        from = register_count,
                        to = register_count - 1,
                        "smaller register chain also fits"
                    );
                    register_count -= 1;
                    outer_repeats = outer;
                }
                Err(e) if e.is_recoverable() => break,
                Err(e) => return Err(e),
            }
        }

        let configuration = LoopConfiguration::new(register_count, outer_repeats)?;
        let cost = evaluate(&configuration, request);

        tracing::debug!(
            registers = register_count,
            outer_repeats,
            instructions = %cost.instruction_count,
            elapsed = cost.elapsed_seconds,
            "delay loop sized"
        );

        Ok(Solution {
            request: *request,
            configuration,
            cost,
            seed_register_count: seed,
        })
    }

    fn unrepresentable(&self, request: &DelayRequest) -> DelayError {
        DelayError::Unrepresentable {
            target_seconds: request.target_seconds(),
            max_registers: self.config.max_registers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solve(clock: f64, cycles: u32, delay: f64) -> Solution {
        let request = DelayRequest::new(clock, cycles, delay).unwrap();
        Solver::default().solve(&request).unwrap()
    }

    #[test]
    fn test_two_milliseconds() {
        let solution = solve(10.0, 2, 0.002);
        assert_eq!(solution.configuration.register_count(), 2);
        assert_eq!(solution.configuration.outer_repeats(), 20);
        assert_eq!(solution.configuration.initial_values(), vec![0x00, 0xec]);
        assert_eq!(solution.cost.instruction_count, 10_282);
        assert!(solution.cost.elapsed_seconds >= 0.002);
        assert!(!solution.resized());
    }

    #[test]
    fn test_two_seconds() {
        let solution = solve(10.0, 2, 2.0);
        assert_eq!(solution.configuration.register_count(), 3);
        assert_eq!(solution.configuration.outer_repeats(), 76);
        assert_eq!(solution.cost.instruction_count, 10_000_539);
        assert!(solution.overshoot_seconds() >= 0.0);
        assert!(solution.overshoot_seconds() < 0.001);
    }

    #[test]
    fn test_resize_when_outer_loop_exhausted() {
        let solution = solve(10.0, 2, 10.0);
        assert_eq!(solution.seed_register_count, 3);
        assert_eq!(solution.configuration.register_count(), 4);
        assert_eq!(solution.configuration.outer_repeats(), 2);
        assert!(solution.resized());
    }

    #[test]
    fn test_steps_down_when_estimate_oversizes() {
        // 400 dummy instructions: estimate says 2 registers, 1 covers 513
        let solution = solve(10.0, 2, 400.0 / 5e6);
        assert_eq!(solution.seed_register_count, 2);
        assert_eq!(solution.configuration.register_count(), 1);
        assert_eq!(solution.configuration.outer_repeats(), 200);
    }

    #[test]
    fn test_full_outer_pass_is_accepted() {
        let solution = solve(10.0, 2, 1.025e-4);
        assert_eq!(solution.configuration.register_count(), 1);
        assert_eq!(solution.configuration.outer_repeats(), 256);
        assert_eq!(solution.configuration.initial_values(), vec![0x00]);
        assert_eq!(solution.cost.instruction_count, 513);
    }

    #[test]
    fn test_unrepresentable() {
        let request = DelayRequest::new(10.0, 2, 10.0).unwrap();
        let solver = Solver::new(SolverConfig::new(3, 2.0).unwrap()).unwrap();
        let err = solver.solve(&request).unwrap_err();
        assert!(matches!(
            err,
            DelayError::Unrepresentable { max_registers: 3, .. }
        ));
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_unrepresentable_by_estimate() {
        let request = DelayRequest::new(10.0, 2, 1e30).unwrap();
        let err = Solver::default().solve(&request).unwrap_err();
        assert!(matches!(err, DelayError::Unrepresentable { .. }));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = SolverConfig {
            max_registers: 0,
            sizing_divisor: 2.0,
        };
        assert!(matches!(
            Solver::new(config),
            Err(DelayError::InvalidConfig(_))
        ));
    }
}
