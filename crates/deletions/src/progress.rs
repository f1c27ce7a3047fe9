use crate::Stage;

/// Observes the checkpoints of enumeration and deduplication: a `start()` for each stage, an `advance()` after every
/// length-group is finished, and a `finish()` once the stage is complete
///
/// All methods do nothing by default, and `()` can be passed when progress isn't needed.
pub trait Progress {
    fn start(&mut self, _stage: Stage, _total: u64) {}

    fn advance(&mut self, _stage: Stage, _completed: u64) {}

    fn finish(&mut self, _stage: Stage) {}
}

impl Progress for () {}

impl<P: Progress + ?Sized> Progress for &mut P {
    fn start(&mut self, stage: Stage, total: u64) {
        (**self).start(stage, total);
    }

    fn advance(&mut self, stage: Stage, completed: u64) {
        (**self).advance(stage, completed);
    }

    fn finish(&mut self, stage: Stage) {
        (**self).finish(stage);
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    #[derive(Clone, Eq, PartialEq, Debug)]
    pub(crate) enum Event {
        Start(Stage, u64),
        Advance(Stage, u64),
        Finish(Stage),
    }

    #[derive(Default, Debug)]
    pub(crate) struct Recorder(pub(crate) Vec<Event>);

    impl Progress for Recorder {
        fn start(&mut self, stage: Stage, total: u64) {
            self.0.push(Event::Start(stage, total));
        }

        fn advance(&mut self, stage: Stage, completed: u64) {
            self.0.push(Event::Advance(stage, completed));
        }

        fn finish(&mut self, stage: Stage) {
            self.0.push(Event::Finish(stage));
        }
    }

    #[test]
    fn stage_display() {
        assert_eq!(
            Stage::Enumerate.to_string(),
            "Generating possible deletions"
        );
        assert_eq!(
            Stage::Deduplicate.to_string(),
            "Assessing deletion similarity"
        );
    }

    fn drive(mut progress: impl Progress) {
        progress.start(Stage::Enumerate, 3);
        progress.advance(Stage::Enumerate, 1);
        progress.finish(Stage::Enumerate);
    }

    #[test]
    fn forward_through_references() {
        let mut recorder = Recorder::default();
        drive(&mut recorder);
        assert_eq!(
            recorder.0,
            [
                Event::Start(Stage::Enumerate, 3),
                Event::Advance(Stage::Enumerate, 1),
                Event::Finish(Stage::Enumerate),
            ]
        );
        // Doesn't do anything, but shouldn't panic either
        drive(());
    }
}
