// ═══════════════════════════════════════════════════════════════════
// Model Tests — DealRecord, DealId, Verdict, Settings
// ═══════════════════════════════════════════════════════════════════

use std::collections::HashSet;

use deal_analyzer_core::models::deal::{DealId, DealRecord, DEFAULT_ITEM_NAME};
use deal_analyzer_core::models::inputs::{DealInputs, RawDealForm};
use deal_analyzer_core::models::result::DealResult;
use deal_analyzer_core::models::settings::{
    Settings, VerdictThresholds, DEFAULT_CACHE_NAME, DEFAULT_STORAGE_KEY,
};
use deal_analyzer_core::models::verdict::{Tone, Verdict};
use deal_analyzer_core::services::calculator::calculate;

fn sample_inputs() -> DealInputs {
    DealInputs::new(50.0, 120.0, 12.0, 5.0, 5.0, 0.0)
}

// ═══════════════════════════════════════════════════════════════════
//  DealId
// ═══════════════════════════════════════════════════════════════════

mod deal_id {
    use super::*;

    #[test]
    fn generated_ids_are_prefixed() {
        let id = DealId::generate();
        assert!(id.as_str().starts_with("d_"));
        assert_eq!(id.as_str().len(), 2 + 32);
    }

    #[test]
    fn generated_ids_are_unique() {
        let ids: HashSet<DealId> = (0..1000).map(|_| DealId::generate()).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn legacy_ids_accepted() {
        let id: DealId = serde_json::from_str("\"d_1718000000000\"").unwrap();
        assert_eq!(id.as_str(), "d_1718000000000");
        assert_eq!(id.to_string(), "d_1718000000000");
    }

    #[test]
    fn serializes_as_plain_string() {
        let id = DealId::from("d_abc");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"d_abc\"");
    }
}

// ═══════════════════════════════════════════════════════════════════
//  DealRecord
// ═══════════════════════════════════════════════════════════════════

mod deal_record {
    use super::*;

    #[test]
    fn new_snapshots_inputs_and_results() {
        let inputs = sample_inputs();
        let result = calculate(&inputs);
        let r = DealRecord::new("Jordan 1 Chicago", "size 42", inputs, result);
        assert_eq!(r.item, "Jordan 1 Chicago");
        assert_eq!(r.notes, "size 42");
        assert_eq!(r.inputs, inputs);
        assert_eq!(r.result, result);
    }

    #[test]
    fn item_and_notes_are_trimmed() {
        let r = DealRecord::new("  Dunk Low  ", "  cash only \n", DealInputs::default(), DealResult::default());
        assert_eq!(r.item, "Dunk Low");
        assert_eq!(r.notes, "cash only");
    }

    #[test]
    fn blank_item_gets_placeholder() {
        let r = DealRecord::new("   ", "", DealInputs::default(), DealResult::default());
        assert_eq!(r.item, DEFAULT_ITEM_NAME);
        assert_eq!(r.item, "Untitled");
    }

    #[test]
    fn custom_placeholder() {
        let r = DealRecord::with_placeholder("", "", DealInputs::default(), DealResult::default(), "Χωρίς όνομα");
        assert_eq!(r.item, "Χωρίς όνομα");
    }

    #[test]
    fn created_at_is_now() {
        let before = chrono::Utc::now().timestamp_millis();
        let r = DealRecord::new("x", "", DealInputs::default(), DealResult::default());
        let after = chrono::Utc::now().timestamp_millis();
        assert!(r.created_at >= before && r.created_at <= after);
        assert_eq!(r.created_at_utc().unwrap().timestamp_millis(), r.created_at);
    }

    #[test]
    fn serializes_flat_camel_case() {
        let r = DealRecord::new("Yeezy", "", sample_inputs(), calculate(&sample_inputs()));
        let v: serde_json::Value = serde_json::to_value(&r).unwrap();
        let obj = v.as_object().unwrap();
        for key in [
            "id", "createdAt", "item", "notes", "buy", "sell", "feePct", "shipBuy", "shipSell",
            "misc", "fee", "net", "roi", "breakeven",
        ] {
            assert!(obj.contains_key(key), "missing key {key}");
        }
        assert_eq!(obj.len(), 14);
        assert_eq!(obj["feePct"], 12.0);
    }

    #[test]
    fn reads_legacy_blob_entry() {
        let json = r#"{
            "id": "d_1718000000000",
            "createdAt": 1718000000000,
            "item": "Nike / Streetwear item",
            "notes": "",
            "buy": 50, "sell": 120, "feePct": 12, "shipBuy": 5, "shipSell": 5, "misc": 0,
            "fee": 14.4, "net": 45.6, "roi": 82.9090909090909, "breakeven": 68.18181818181819
        }"#;
        let r: DealRecord = serde_json::from_str(json).unwrap();
        assert_eq!(r.id, DealId::from("d_1718000000000"));
        assert_eq!(r.created_at, 1_718_000_000_000);
        assert_eq!(r.inputs, sample_inputs());
        assert_eq!(r.result.net, 45.6);
    }

    #[test]
    fn stored_results_are_not_recomputed() {
        // A snapshot that no longer matches the formulas stays as written.
        let json = r#"{"id":"d_1","createdAt":1,"item":"old","notes":"",
            "buy":10,"sell":20,"feePct":0,"shipBuy":0,"shipSell":0,"misc":0,
            "fee":0,"net":999,"roi":0,"breakeven":0}"#;
        let r: DealRecord = serde_json::from_str(json).unwrap();
        assert_eq!(r.result.net, 999.0);
    }

    #[test]
    fn missing_notes_default_to_empty() {
        let json = r#"{"id":"d_1","createdAt":1,"item":"x",
            "buy":0,"sell":0,"feePct":0,"shipBuy":0,"shipSell":0,"misc":0,
            "fee":0,"net":0,"roi":0,"breakeven":0}"#;
        let r: DealRecord = serde_json::from_str(json).unwrap();
        assert_eq!(r.notes, "");
    }

    #[test]
    fn serde_roundtrip_json() {
        let r = DealRecord::new("Samba", "gum sole", sample_inputs(), calculate(&sample_inputs()));
        let json = serde_json::to_string(&r).unwrap();
        let back: DealRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(r, back);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  RawDealForm
// ═══════════════════════════════════════════════════════════════════

mod raw_form {
    use super::*;

    #[test]
    fn defaults() {
        let f = RawDealForm::default();
        assert_eq!(f.item, "Nike / Streetwear item");
        assert_eq!(f.fee_pct, "12");
        assert_eq!(f.buy, "0");
        assert_eq!(f.notes, "");
    }

    #[test]
    fn partial_json_fills_defaults() {
        let f: RawDealForm = serde_json::from_str(r#"{"buy":"50","sell":"120"}"#).unwrap();
        assert_eq!(f.buy, "50");
        assert_eq!(f.sell, "120");
        assert_eq!(f.fee_pct, "12");
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Verdict / Tone
// ═══════════════════════════════════════════════════════════════════

mod verdict {
    use super::*;

    #[test]
    fn tone_display() {
        assert_eq!(Tone::Good.to_string(), "good");
        assert_eq!(Tone::Mid.to_string(), "mid");
        assert_eq!(Tone::Bad.to_string(), "bad");
    }

    #[test]
    fn tone_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Tone::Good).unwrap(), "\"good\"");
    }

    #[test]
    fn verdict_display_is_label() {
        assert_eq!(Verdict::new(Tone::Mid).to_string(), "OK / MAYBE");
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Settings
// ═══════════════════════════════════════════════════════════════════

mod settings {
    use super::*;

    #[test]
    fn defaults() {
        let s = Settings::default();
        assert_eq!(s.currency, "EUR");
        assert_eq!(s.recent_limit, 8);
        assert_eq!(s.placeholder_item, "Untitled");
        assert_eq!(s.storage_key, DEFAULT_STORAGE_KEY);
        assert_eq!(s.cache_name, DEFAULT_CACHE_NAME);
        assert_eq!(s.precache, vec!["/", "/manifest.webmanifest"]);
        assert_eq!(s.thresholds, VerdictThresholds::default());
    }

    #[test]
    fn threshold_defaults() {
        let t = VerdictThresholds::default();
        assert_eq!((t.good_net, t.good_roi, t.mid_net, t.mid_roi), (40.0, 15.0, 10.0, 5.0));
    }

    #[test]
    fn empty_json_is_default() {
        assert_eq!(Settings::from_json_str("{}").unwrap(), Settings::default());
    }

    #[test]
    fn partial_json_overrides() {
        let s = Settings::from_json_str(r#"{"currency":"USD","thresholds":{"good_net":100}}"#).unwrap();
        assert_eq!(s.currency, "USD");
        assert_eq!(s.thresholds.good_net, 100.0);
        assert_eq!(s.thresholds.good_roi, 15.0);
        assert_eq!(s.recent_limit, 8);
    }

    #[test]
    fn invalid_json_is_error() {
        assert!(Settings::from_json_str("{not json").is_err());
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"recent_limit": 3}"#).unwrap();
        let s = Settings::load_from_file(&path).unwrap();
        assert_eq!(s.recent_limit, 3);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Settings::load_from_file(dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, deal_analyzer_core::errors::CoreError::FileIO(_)));
    }
}
