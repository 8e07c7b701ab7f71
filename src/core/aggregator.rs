//! Folds parsed events into the base [`ChatDataset`].
//!
//! Two working sets are threaded through a single pass over the events:
//!
//! - `group_members`: everyone currently in the group. Joins and senders are
//!   inserted, leaves removed.
//! - `active_senders`: everyone with at least one message who has not left
//!   since.
//!
//! Both are local to one [`aggregate`] call, so the function is pure and can
//! run on many transcripts in parallel.

use std::collections::HashSet;

use indexmap::IndexMap;
use tracing::debug;

use super::models::{ChatDataset, ChatEvent, Identity, MemberStats, MembershipKind};

/// Builds the statistics table from events in transcript order.
///
/// Every sender and every membership subject gets an entry in
/// [`ChatDataset::stats`], so a member who joined and left without writing
/// still shows up as silent.
///
/// # Example
///
/// ```rust
/// use chatstats::core::aggregator::aggregate;
/// use chatstats::parser::TranscriptParser;
///
/// let events = TranscriptParser::new().events_str(
///     "01.01.24, 10:00 - Alice: hello\n\
///      01.01.24, 10:01 - Bob joined the group",
/// );
/// let dataset = aggregate(events);
///
/// assert_eq!(dataset.total_members, 2);
/// assert_eq!(dataset.active_members, 1);
/// assert_eq!(dataset.silent_members, 1);
/// assert!(dataset.get("Bob").unwrap().is_silent);
/// ```
pub fn aggregate(events: impl IntoIterator<Item = ChatEvent>) -> ChatDataset {
    let mut stats: IndexMap<Identity, MemberStats> = IndexMap::new();
    let mut group_members: HashSet<Identity> = HashSet::new();
    let mut active_senders: HashSet<Identity> = HashSet::new();

    for event in events {
        match event {
            ChatEvent::Message(msg) => {
                stats
                    .entry(msg.sender.clone())
                    .or_default()
                    .record(msg.body, msg.date);
                group_members.insert(msg.sender.clone());
                active_senders.insert(msg.sender);
            }
            ChatEvent::Membership(event) => {
                stats
                    .entry(event.subject.clone())
                    .or_insert_with(MemberStats::silent);
                match event.kind {
                    MembershipKind::Join => {
                        group_members.insert(event.subject);
                    }
                    MembershipKind::Leave => {
                        group_members.remove(&event.subject);
                        active_senders.remove(&event.subject);
                    }
                }
            }
        }
    }

    for member in &group_members {
        if !stats.contains_key(member) {
            stats.insert(member.clone(), MemberStats::silent());
        }
    }
    for member in stats.values_mut() {
        member.is_silent = member.message_count == 0;
    }

    let total_members = group_members.len();
    let active_members = active_senders.len();
    debug!(
        members = stats.len(),
        total_members, active_members, "aggregated transcript"
    );

    ChatDataset {
        stats,
        total_members,
        active_members,
        silent_members: total_members.saturating_sub(active_members),
    }
}
