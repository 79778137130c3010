use crate::scorer::Scorer;
use crate::stemmer::WordStemmer;
use rayon::prelude::*;

fn row_str<S: AsRef<str>>(row: &Option<S>) -> Option<&str> {
    row.as_ref().map(|s| s.as_ref())
}

/// Stem each row.
///
/// Every input row produces exactly one output, in input order. Null and
/// empty rows map to `""`.
pub fn stem_rows<'a, I>(stemmer: &WordStemmer, rows: I) -> Vec<String>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    rows.into_iter().map(|row| stemmer.stem_value(row)).collect()
}

/// Score each row with a single scorer; null and empty rows score 0
pub fn score_rows<'a, I>(scorer: &Scorer, rows: I) -> Vec<i64>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    rows.into_iter().map(|row| scorer.score_value(row)).collect()
}

/// Score rows on the rayon pool.
///
/// Each worker scores with its own fork of `scorer`, so no stemmer handle is
/// ever used by two threads. The result lines up with `rows`.
pub fn score_rows_parallel<S>(scorer: &Scorer, rows: &[Option<S>]) -> Vec<i64>
where
    S: AsRef<str> + Sync,
{
    rows.par_iter()
        .map_init(
            || scorer.fork(),
            |worker, row| worker.score_value(row_str(row)),
        )
        .collect()
}

/// Score rows with at most `jobs` worker threads; `jobs <= 1` stays on the
/// calling thread.
pub fn score_rows_with_jobs<S>(scorer: &Scorer, rows: &[Option<S>], jobs: usize) -> Vec<i64>
where
    S: AsRef<str> + Sync,
{
    if jobs <= 1 {
        return score_rows(scorer, rows.iter().map(row_str));
    }

    match rayon::ThreadPoolBuilder::new().num_threads(jobs).build() {
        Ok(pool) => pool.install(|| score_rows_parallel(scorer, rows)),
        Err(e) => {
            tracing::warn!("failed to build worker pool, scoring on the global pool: {}", e);
            score_rows_parallel(scorer, rows)
        }
    }
}
