// crates/framematch-net/src/progress.rs
//
// Read adapter that reports how many bytes of the request body have been
// handed to the HTTP client so far.

use std::io::{self, Read};

pub struct ProgressReader<R, F> {
    inner:       R,
    sent:        u64,
    total:       u64,
    on_progress: F,
}

impl<R: Read, F: FnMut(u64, u64)> ProgressReader<R, F> {
    pub fn new(inner: R, total: u64, on_progress: F) -> Self {
        Self { inner, sent: 0, total, on_progress }
    }

    pub fn sent(&self) -> u64 {
        self.sent
    }
}

impl<R: Read, F: FnMut(u64, u64)> Read for ProgressReader<R, F> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        if n > 0 {
            self.sent += n as u64;
            (self.on_progress)(self.sent, self.total);
        }
        Ok(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_cumulative_bytes_up_to_total() {
        let data = vec![7u8; 10_000];
        let mut reports = Vec::new();
        let mut reader = ProgressReader::new(&data[..], data.len() as u64, |sent, total| {
            reports.push((sent, total));
        });

        let mut buf = [0u8; 1024];
        while reader.read(&mut buf).unwrap() > 0 {}
        assert_eq!(reader.sent(), 10_000);
        drop(reader);

        assert!(!reports.is_empty());
        assert!(reports.windows(2).all(|w| w[0].0 < w[1].0));
        assert_eq!(*reports.last().unwrap(), (10_000, 10_000));
    }
}
