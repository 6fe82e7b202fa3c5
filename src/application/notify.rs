use crate::domain::SwapOutcome;

type Callback = Box<dyn FnMut()>;

/// Two listener slots fired after every completion check.
#[derive(Default)]
pub struct Notifier {
    on_finished: Option<Callback>,
    on_unfinished: Option<Callback>,
}

impl Notifier {
    pub fn set_on_finished(&mut self, callback: impl FnMut() + 'static) {
        self.on_finished = Some(Box::new(callback));
    }

    pub fn set_on_unfinished(&mut self, callback: impl FnMut() + 'static) {
        self.on_unfinished = Some(Box::new(callback));
    }

    pub fn notify(&mut self, outcome: SwapOutcome) {
        let slot = match outcome {
            SwapOutcome::Finished => &mut self.on_finished,
            SwapOutcome::Unfinished => &mut self.on_unfinished,
        };
        if let Some(callback) = slot {
            callback();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_routes_outcome_to_matching_slot() {
        let finished = Rc::new(Cell::new(0));
        let unfinished = Rc::new(Cell::new(0));
        let mut notifier = Notifier::default();
        notifier.set_on_finished({
            let finished = finished.clone();
            move || finished.set(finished.get() + 1)
        });
        notifier.set_on_unfinished({
            let unfinished = unfinished.clone();
            move || unfinished.set(unfinished.get() + 1)
        });

        notifier.notify(SwapOutcome::Unfinished);
        notifier.notify(SwapOutcome::Unfinished);
        notifier.notify(SwapOutcome::Finished);
        assert_eq!((finished.get(), unfinished.get()), (1, 2));
    }

    #[test]
    fn test_empty_slots_are_silent() {
        Notifier::default().notify(SwapOutcome::Finished);
    }
}
