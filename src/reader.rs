use crate::error::ReadError;
use crate::event::Event;
use std::io::BufRead;

/// Reads order updates from a line-oriented source, one JSON record per
/// line.
///
/// Wraps any `BufRead` and yields results lazily, so large streams are
/// processed without loading them into memory. Parse failures carry the
/// 1-based line number of the offending record and never stop the stream.
pub struct EventReader<R: BufRead> {
    source: R,
}

impl<R: BufRead> EventReader<R> {
    /// Creates a new `EventReader` from any `BufRead` source (e.g. a
    /// buffered file or locked stdin).
    pub fn new(source: R) -> Self {
        Self { source }
    }

    /// Returns an iterator that lazily reads and parses events.
    pub fn events(self) -> impl Iterator<Item = Result<Event, ReadError>> {
        self.source.lines().enumerate().map(|(idx, line)| {
            let line = line?;
            Event::parse(&line).map_err(|source| ReadError::Parse {
                line: idx + 1,
                source,
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::Status;

    #[test]
    fn test_reader_valid_stream() {
        let data = "{\"orderId\": 1, \"updateId\": 1, \"status\": \"NEW\", \"amount\": 5}\n\
                    {\"orderId\": 1, \"updateId\": 2, \"status\": \"COOKING\"}";
        let results: Vec<_> = EventReader::new(data.as_bytes()).events().collect();

        assert_eq!(results.len(), 2);
        let event = results[0].as_ref().unwrap();
        assert_eq!(event.order_id, 1);
        assert_eq!(event.amount, Some(5));
        assert_eq!(results[1].as_ref().unwrap().status, Status::Cooking);
    }

    #[test]
    fn test_reader_numbers_failed_lines() {
        let data = "{\"orderId\": 1, \"updateId\": 1, \"status\": \"NEW\", \"amount\": 5}\n\
                    not json\n\
                    {\"orderId\": 1, \"updateId\": 2, \"status\": \"COOKING\"}";
        let results: Vec<_> = EventReader::new(data.as_bytes()).events().collect();

        assert_eq!(results.len(), 3);
        assert!(results[0].is_ok());
        match results[1].as_ref().unwrap_err() {
            ReadError::Parse { line, .. } => assert_eq!(*line, 2),
            other => panic!("unexpected error: {other}"),
        }
        // The stream continues past the failure.
        assert!(results[2].is_ok());
    }
}
