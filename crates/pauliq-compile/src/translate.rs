//! Translation orchestrator.
//!
//! Every term is lowered independently (encode, synthesize, emit) and the
//! resulting block is stored under the term's position. Blocks are read
//! back in ascending position order, so the program text does not depend
//! on scheduling.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};

use rayon::prelude::*;
use tracing::{debug, info, instrument, warn};

use pauliq_ir::{OperatorRecord, OperatorSet};
use pauliq_qasm::{assemble, emit_block};

use crate::config::{ExecutionMode, TranslationConfig};
use crate::error::{CompileError, CompileResult};
use crate::synthesis::synthesize;

/// Lowers operator sets to OpenQASM programs.
#[derive(Debug, Clone)]
pub struct Translator {
    config: TranslationConfig,
}

impl Translator {
    /// Create a translator, validating the configuration.
    pub fn new(config: TranslationConfig) -> CompileResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configuration in use.
    pub fn config(&self) -> &TranslationConfig {
        &self.config
    }

    /// Lower every term, keyed by position.
    ///
    /// Either every term succeeds or nothing is returned: the first failure
    /// stops the remaining work and is reported as the error.
    #[instrument(skip(self, set), fields(terms = set.len(), qubits = set.num_qubits()))]
    pub fn translate_terms(&self, set: &OperatorSet) -> CompileResult<BTreeMap<usize, String>> {
        info!(
            "Translating {} terms on {} qubits ({})",
            set.len(),
            set.num_qubits(),
            self.config.execution
        );

        let store = ResultStore::default();
        match self.config.execution {
            ExecutionMode::Sequential => self.run_sequential(set, &store),
            ExecutionMode::Parallel => self.run_parallel(set, &store)?,
        }

        let blocks = store.finish()?;
        info!("Translated {} terms", blocks.len());
        Ok(blocks)
    }

    /// Lower every term and assemble the full program.
    pub fn translate(&self, set: &OperatorSet) -> CompileResult<String> {
        let blocks = self.translate_terms(set)?;
        Ok(assemble(
            self.config.qasm_version,
            set.num_qubits(),
            blocks.values().map(String::as_str),
        ))
    }

    fn run_sequential(&self, set: &OperatorSet, store: &ResultStore) {
        for record in set {
            if store.failed() {
                break;
            }
            self.process(record, set.num_qubits(), store);
        }
    }

    fn run_parallel(&self, set: &OperatorSet, store: &ResultStore) -> CompileResult<()> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.config.threads.unwrap_or(0))
            .thread_name(|i| format!("pauliq-worker-{i}"))
            .build()
            .map_err(|e| CompileError::ThreadPool(e.to_string()))?;

        debug!("Dispatching on {} workers", pool.current_num_threads());
        pool.install(|| {
            set.records().par_iter().for_each(|record| {
                if store.failed() {
                    return;
                }
                self.process(record, set.num_qubits(), store);
            });
        });
        Ok(())
    }

    fn process(&self, record: &OperatorRecord, num_qubits: usize, store: &ResultStore) {
        match lower_term(record, num_qubits, self.config.angle_multiplier) {
            Ok(block) => store.record(record.position(), block),
            Err(e) => store.fail(e),
        }
    }
}

/// Lower a set with the given configuration and assemble the program.
pub fn translate(set: &OperatorSet, config: &TranslationConfig) -> CompileResult<String> {
    Translator::new(config.clone())?.translate(set)
}

fn lower_term(record: &OperatorRecord, num_qubits: usize, multiplier: f64) -> CompileResult<String> {
    let encoded = record.encode()?;
    let circuit = synthesize(record, &encoded, num_qubits, multiplier)?;
    debug!(
        "Term {} lowered: pivot {}, {} gates",
        record.position(),
        circuit.pivot,
        circuit.len()
    );
    Ok(emit_block(&circuit))
}

/// Position-keyed block store shared by the workers.
#[derive(Default)]
struct ResultStore {
    blocks: Mutex<BTreeMap<usize, String>>,
    failed: AtomicBool,
    first_error: Mutex<Option<CompileError>>,
}

impl ResultStore {
    fn failed(&self) -> bool {
        self.failed.load(Ordering::Acquire)
    }

    fn record(&self, position: usize, block: String) {
        if self.failed() {
            return;
        }
        let duplicate = {
            let mut blocks = self.blocks.lock().unwrap_or_else(PoisonError::into_inner);
            blocks.insert(position, block).is_some()
        };
        if duplicate {
            self.fail(CompileError::DuplicatePosition(position));
        }
    }

    fn fail(&self, error: CompileError) {
        let mut first = self
            .first_error
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if first.is_none() {
            warn!("Translation aborted: {error}");
            *first = Some(error);
        }
        self.failed.store(true, Ordering::Release);
    }

    fn finish(self) -> CompileResult<BTreeMap<usize, String>> {
        let error = self
            .first_error
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(error) = error {
            return Err(error);
        }
        Ok(self
            .blocks
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner))
    }
}
