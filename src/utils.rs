use std::{fs, io};
use std::io::{BufRead, BufReader};
use std::time::{Duration, Instant};

pub(crate) fn file_to_vec(filename: String) -> io::Result<Vec<String>> {
    let file_in = fs::File::open(filename)?;
    let file_reader = BufReader::new(file_in);
    file_reader.lines().collect()
}

pub(crate) fn trace(l_type: &str, l_step: &str, started: Instant, prev_elapsed: Duration) -> Duration {
    log::trace!("{} | Total={:.2?} | {}={:.2?}", l_type, started.elapsed(), l_step, started.elapsed() - prev_elapsed);
    started.elapsed()
}
