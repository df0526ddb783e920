//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::collections::VecDeque;

use five_plus::{Board, BoardConfig, SpawnSource, CELL_COUNT};
use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Initialize test logging once.
///
/// Level comes from `TEST_LOG`, then `RUST_LOG`, then `"warn"`.
pub fn init_logging() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

/// Spawn source that replays scripted draws.
///
/// When the script runs out it picks the first empty cell and the low value.
#[derive(Clone, Debug, Default)]
pub struct ScriptedSource {
    pub indices: VecDeque<usize>,
    pub chances: VecDeque<bool>,
    pub probabilities_seen: Vec<f64>,
}

impl ScriptedSource {
    pub fn new(indices: &[usize], chances: &[bool]) -> Self {
        Self {
            indices: indices.iter().copied().collect(),
            chances: chances.iter().copied().collect(),
            probabilities_seen: Vec::new(),
        }
    }
}

impl SpawnSource for ScriptedSource {
    fn pick_index(&mut self, len: usize) -> usize {
        self.indices.pop_front().unwrap_or(0).min(len - 1)
    }

    fn chance(&mut self, probability: f64) -> bool {
        self.probabilities_seen.push(probability);
        self.chances.pop_front().unwrap_or(true)
    }
}

/// Board with the default config driven by a scripted source.
pub fn scripted_board(source: ScriptedSource) -> Board<ScriptedSource> {
    init_logging();
    Board::with_source(BoardConfig::default(), source).expect("default config is valid")
}

/// Grid values from a literal where 0 means empty.
pub fn values(spec: [u32; CELL_COUNT]) -> [Option<u32>; CELL_COUNT] {
    spec.map(|v| (v > 0).then_some(v))
}
