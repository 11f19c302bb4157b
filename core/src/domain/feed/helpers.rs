use rand::seq::SliceRandom;

use crate::domain::{
    analysis::entities::requires_human_review,
    feed::entities::{ScanFeed, ScanFeedEntry, ScanRecord, ScanStatus},
};

/// Human-readable relative timestamp. The singular branch is only hit when
/// the computed minute value is exactly 1; with the current 2-minute
/// stepping that does not occur, but the branch is part of the contract.
pub fn relative_timestamp(minutes_ago: u64) -> String {
    match minutes_ago {
        0 => "Just now".to_string(),
        1 => "1 min ago".to_string(),
        n => format!("{n} mins ago"),
    }
}

/// Assemble the live feed from the backing set: a full-set random
/// permutation, then per-entry sequential ids, relative timestamps stepped
/// by 2 minutes, and threshold-derived status.
pub fn assemble_feed(mut records: Vec<ScanRecord>) -> ScanFeed {
    records.shuffle(&mut rand::thread_rng());

    let mut scans = Vec::with_capacity(records.len());
    let mut flagged_count = 0;

    for (i, record) in records.into_iter().enumerate() {
        let minutes_ago = (i as u64) * 2;

        let is_flagged = requires_human_review(record.confidence);
        if is_flagged {
            flagged_count += 1;
        }

        scans.push(ScanFeedEntry {
            id: format!("scan-{}", i + 1),
            patient_id: record.patient_id,
            food: record.food,
            confidence: record.confidence,
            timestamp: relative_timestamp(minutes_ago),
            status: if is_flagged {
                ScanStatus::Flagged
            } else {
                ScanStatus::Verified
            },
            requires_review: is_flagged,
        });
    }

    let total = scans.len();
    ScanFeed {
        scans,
        total,
        flagged_count,
    }
}
