pub mod errors;
pub mod models;
pub mod offline;
pub mod services;
pub mod storage;

use models::{
    deal::{DealId, DealRecord},
    evaluation::Evaluation,
    inputs::{DealInputs, RawDealForm},
    settings::Settings,
    verdict::Verdict,
};
use services::{calculator, classifier, format, normalizer};
use storage::{deal_store::DealStore, memory::MemoryStore, traits::KeyValueStore};

use errors::CoreError;

/// Main entry point for the Deal Analyzer core library.
///
/// Owns the settings and the saved-deal store. Evaluation is pure; saving and
/// removing mutate the store, which persists itself on every change.
#[must_use]
pub struct DealAnalyzer {
    settings: Settings,
    store: DealStore<Box<dyn KeyValueStore>>,
}

impl std::fmt::Debug for DealAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DealAnalyzer")
            .field("deals", &self.store.len())
            .field("settings", &self.settings)
            .finish()
    }
}

impl DealAnalyzer {
    /// Load saved deals from `backend` (slot `settings.storage_key`).
    pub fn open(backend: Box<dyn KeyValueStore>, settings: Settings) -> Self {
        let store = DealStore::load(backend, settings.storage_key.clone());
        Self { settings, store }
    }

    /// Open with a file-backed store in `dir` (native only).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn open_dir(dir: impl Into<std::path::PathBuf>, settings: Settings) -> Result<Self, CoreError> {
        let backend = storage::file::FileStore::open(dir)?;
        Ok(Self::open(Box::new(backend), settings))
    }

    /// Non-persistent analyzer, starting empty.
    pub fn in_memory(settings: Settings) -> Self {
        Self::open(Box::new(MemoryStore::new()), settings)
    }

    // ── Evaluation ──────────────────────────────────────────────────

    /// Normalize a raw form, then calculate and classify it.
    #[must_use]
    pub fn evaluate(&self, form: &RawDealForm) -> Evaluation {
        self.evaluate_inputs(&normalizer::normalize_form(form))
    }

    /// Calculate and classify already-numeric inputs.
    #[must_use]
    pub fn evaluate_inputs(&self, inputs: &DealInputs) -> Evaluation {
        let result = calculator::calculate(inputs);
        let verdict = classifier::classify_with(&self.settings.thresholds, result.net, result.roi);
        Evaluation {
            inputs: *inputs,
            result,
            verdict,
        }
    }

    /// Verdict of a saved deal, from its stored results.
    #[must_use]
    pub fn verdict_for(&self, record: &DealRecord) -> Verdict {
        classifier::classify_with(&self.settings.thresholds, record.result.net, record.result.roi)
    }

    // ── Saved Deals ─────────────────────────────────────────────────

    /// Evaluate the form and save a snapshot of it as the newest deal.
    pub fn save_deal(&mut self, form: &RawDealForm) -> DealRecord {
        let record = self.snapshot(form);
        self.store.append(record.clone());
        record
    }

    fn snapshot(&self, form: &RawDealForm) -> DealRecord {
        let evaluation = self.evaluate(form);
        DealRecord::with_placeholder(
            &form.item,
            &form.notes,
            evaluation.inputs,
            evaluation.result,
            &self.settings.placeholder_item,
        )
    }

    /// [`save_deal`](Self::save_deal) with a single checked write: storage
    /// failures come back as errors instead of being logged.
    pub fn try_save_deal(&mut self, form: &RawDealForm) -> Result<DealRecord, CoreError> {
        let record = self.snapshot(form);
        if self.store.try_append(record.clone())? {
            Ok(record)
        } else {
            Err(CoreError::DuplicateDeal(record.id.to_string()))
        }
    }

    /// Remove a saved deal. Returns `false` if no deal had this id.
    pub fn remove_deal(&mut self, id: &DealId) -> bool {
        self.store.remove(id).is_some()
    }

    /// [`remove_deal`](Self::remove_deal) with a single checked write.
    pub fn try_remove_deal(&mut self, id: &DealId) -> Result<bool, CoreError> {
        Ok(self.store.try_remove(id)?.is_some())
    }

    #[must_use]
    pub fn get_deal(&self, id: &DealId) -> Option<&DealRecord> {
        self.store.get(id)
    }

    /// All saved deals, newest first.
    #[must_use]
    pub fn deals(&self) -> &[DealRecord] {
        self.store.records()
    }

    /// The deals the UI shows: the newest `settings.recent_limit`.
    #[must_use]
    pub fn recent_deals(&self) -> &[DealRecord] {
        self.store.recent(self.settings.recent_limit)
    }

    #[must_use]
    pub fn deal_count(&self) -> usize {
        self.store.len()
    }

    /// Case-insensitive match on item name and notes, newest first.
    #[must_use]
    pub fn search_deals(&self, query: &str) -> Vec<&DealRecord> {
        let q = query.to_lowercase();
        self.store
            .records()
            .iter()
            .filter(|d| d.item.to_lowercase().contains(&q) || d.notes.to_lowercase().contains(&q))
            .collect()
    }

    /// Re-read saved deals from storage (another window wrote the slot).
    pub fn reload(&mut self) {
        self.store.reload();
    }

    /// Write saved deals now and report any storage failure.
    pub fn flush(&mut self) -> Result<(), CoreError> {
        self.store.flush()
    }

    // ── Settings & Display ──────────────────────────────────────────

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Money in the configured currency, e.g. `€45.60`.
    #[must_use]
    pub fn format_money(&self, amount: f64) -> String {
        format::format_money(amount, &self.settings.currency)
    }

    /// Percentage with one decimal, e.g. `82.9%`.
    #[must_use]
    pub fn format_pct(&self, value: f64) -> String {
        format::format_pct(value)
    }

    // ── Export ──────────────────────────────────────────────────────

    /// All saved deals as pretty JSON, same shape as the storage blob.
    pub fn export_deals_to_json(&self) -> Result<String, CoreError> {
        serde_json::to_string_pretty(self.store.records())
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize deals to JSON: {e}")))
    }

    /// All saved deals as CSV, header row first.
    /// Columns: id, created_at, item, notes, buy, sell, fee_pct, ship_buy, ship_sell, misc, fee, net, roi, breakeven
    pub fn export_deals_to_csv(&self) -> Result<String, CoreError> {
        let mut wtr = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(Vec::new());
        wtr.write_record(CSV_HEADER)?;
        for d in self.store.records() {
            wtr.serialize(CsvRow::from(d))?;
        }
        let bytes = wtr
            .into_inner()
            .map_err(|e| CoreError::Serialization(format!("Failed to write deals CSV: {e}")))?;
        String::from_utf8(bytes)
            .map_err(|e| CoreError::Serialization(format!("Deals CSV is not UTF-8: {e}")))
    }
}

const CSV_HEADER: [&str; 14] = [
    "id", "created_at", "item", "notes", "buy", "sell", "fee_pct", "ship_buy", "ship_sell",
    "misc", "fee", "net", "roi", "breakeven",
];

#[derive(serde::Serialize)]
struct CsvRow<'a> {
    id: &'a str,
    created_at: i64,
    item: &'a str,
    notes: &'a str,
    buy: f64,
    sell: f64,
    fee_pct: f64,
    ship_buy: f64,
    ship_sell: f64,
    misc: f64,
    fee: f64,
    net: f64,
    roi: f64,
    breakeven: f64,
}

impl<'a> From<&'a DealRecord> for CsvRow<'a> {
    fn from(d: &'a DealRecord) -> Self {
        Self {
            id: d.id.as_str(),
            created_at: d.created_at,
            item: &d.item,
            notes: &d.notes,
            buy: d.inputs.buy,
            sell: d.inputs.sell,
            fee_pct: d.inputs.fee_pct,
            ship_buy: d.inputs.ship_buy,
            ship_sell: d.inputs.ship_sell,
            misc: d.inputs.misc,
            fee: d.result.fee,
            net: d.result.net,
            roi: d.result.roi,
            breakeven: d.result.breakeven,
        }
    }
}
