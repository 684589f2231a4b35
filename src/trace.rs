//! Logging macros that compile to nothing unless the `tracing` feature is enabled.

/// Emits a `tracing` event at TRACE level.
macro_rules! trace_event {
    ($($argument:tt)+) => {
        {
            #[cfg(feature = "tracing")]
            ::tracing::trace!($($argument)+);
        }
    };
}

/// Emits a `tracing` event at DEBUG level.
macro_rules! debug_event {
    ($($argument:tt)+) => {
        {
            #[cfg(feature = "tracing")]
            ::tracing::debug!($($argument)+);
        }
    };
}

pub(crate) use debug_event;
pub(crate) use trace_event;

#[cfg(all(test, feature = "tracing"))]
mod tests {
    use crate::set::Set;
    use rstest::rstest;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct CapturedOutput(Arc<Mutex<Vec<u8>>>);

    impl CapturedOutput {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl io::Write for CapturedOutput {
        fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(bytes);
            Ok(bytes.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn capture<F: FnOnce()>(action: F) -> String {
        let output = CapturedOutput::default();
        let writer = output.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        tracing::subscriber::with_default(subscriber, action);
        output.contents()
    }

    #[rstest]
    fn macros_emit_at_their_levels() {
        let logs = capture(|| {
            trace_event!(answer = 42, "trace message");
            debug_event!("debug message");
        });

        assert!(logs.contains("TRACE"));
        assert!(logs.contains("trace message"));
        assert!(logs.contains("answer=42"));
        assert!(logs.contains("DEBUG"));
        assert!(logs.contains("debug message"));
    }

    #[rstest]
    fn set_mutations_emit_events() {
        let logs = capture(|| {
            let mut set = Set::new();
            set.insert(1);
            set.insert(1);
            set.remove(&1);
        });

        assert!(logs.contains("inserted element length=1"));
        assert!(logs.contains("rejected duplicate element"));
        assert!(logs.contains("removed element length=0"));
    }

    #[rstest]
    fn stale_handle_is_logged_with_its_slot() {
        let logs = capture(|| {
            let mut set = Set::new();
            let handle = set.try_insert('a').unwrap();
            set.clear();
            assert!(set.remove_handle(handle).is_err());
        });

        assert!(logs.contains("cleared set"));
        assert!(logs.contains("stale element handle index=0 generation=0"));
    }

    #[rstest]
    fn algebra_emits_debug_events() {
        let logs = capture(|| {
            let left = Set::from([1, 2]);
            let right = Set::from([2, 3]);
            let _ = left.union(&right);
            let _ = left.symmetric_difference(&right);
        });

        assert!(logs.contains("built union length=3"));
        assert!(logs.contains("built symmetric difference length=2"));
    }
}
