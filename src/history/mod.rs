// Step history for reviewing a finished or cancelled sort

use crate::narrator::StepEvent;

/// Recorded steps of one sort run with a review cursor
///
/// Recording stops once the memory limit would be exceeded; the steps
/// recorded so far remain reviewable.
#[derive(Debug)]
pub struct StepHistory {
    steps: Vec<StepEvent>,
    cursor: usize,
    max_memory: usize,
    current_memory: usize,
    truncated: bool,
}

impl StepHistory {
    pub fn new(max_memory: usize) -> Self {
        StepHistory {
            steps: Vec::new(),
            cursor: 0,
            max_memory,
            current_memory: 0,
            truncated: false,
        }
    }

    /// Record a step and move the cursor to it
    pub fn push(&mut self, step: StepEvent) -> Result<(), String> {
        let step_size = step.estimated_size();

        if self.current_memory + step_size > self.max_memory {
            self.truncated = true;
            return Err(format!(
                "Step history memory limit exceeded: {} + {} > {}",
                self.current_memory, step_size, self.max_memory
            ));
        }

        self.current_memory += step_size;
        self.steps.push(step);
        self.cursor = self.steps.len() - 1;
        Ok(())
    }

    /// The step under the cursor
    pub fn current(&self) -> Option<&StepEvent> {
        self.steps.get(self.cursor)
    }

    pub fn get(&self, index: usize) -> Option<&StepEvent> {
        self.steps.get(index)
    }

    pub fn position(&self) -> usize {
        self.cursor
    }

    pub fn step_backward(&mut self) -> bool {
        if self.cursor > 0 {
            self.cursor -= 1;
            true
        } else {
            false
        }
    }

    pub fn step_forward(&mut self) -> bool {
        if self.cursor + 1 < self.steps.len() {
            self.cursor += 1;
            true
        } else {
            false
        }
    }

    pub fn rewind_to_start(&mut self) {
        self.cursor = 0;
    }

    pub fn jump_to_end(&mut self) {
        self.cursor = self.steps.len().saturating_sub(1);
    }

    pub fn is_at_end(&self) -> bool {
        self.cursor + 1 >= self.steps.len()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Whether steps were dropped because of the memory limit
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    pub fn memory_usage(&self) -> usize {
        self.current_memory
    }

    pub fn memory_limit(&self) -> usize {
        self.max_memory
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::narrator::{Algorithm, SortSteps};
    use crate::sequence::Sequence;

    fn recorded(values: &[i64], limit: usize) -> StepHistory {
        let mut history = StepHistory::new(limit);
        for step in SortSteps::new(Sequence::from_values(values), Algorithm::BubbleSort) {
            if history.push(step).is_err() {
                break;
            }
        }
        history
    }

    #[test]
    fn test_cursor_follows_recording_then_navigates() {
        let mut history = recorded(&[3, 2, 1], usize::MAX);
        assert!(history.is_at_end());
        let last = history.len() - 1;
        assert_eq!(history.position(), last);

        assert!(history.step_backward());
        assert_eq!(history.position(), last - 1);
        assert!(history.step_forward());
        assert!(!history.step_forward());

        history.rewind_to_start();
        assert_eq!(history.position(), 0);
        assert!(!history.step_backward());

        history.jump_to_end();
        assert_eq!(history.position(), last);
    }

    #[test]
    fn test_memory_limit_truncates() {
        let full = recorded(&[4, 3, 2, 1], usize::MAX);
        let one_step = full.get(0).map(|s| s.estimated_size()).unwrap_or(0);

        let limited = recorded(&[4, 3, 2, 1], one_step * 2);
        assert!(limited.is_truncated());
        assert!(limited.len() < full.len());
        assert!(limited.memory_usage() <= limited.memory_limit());
    }
}
