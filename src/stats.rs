//! stats.rs
//!
//! Turns raw API responses into the handful of fields shown on the card:
//!   • total commits over eligible (non-fork, non-archived) repositories
//!   • a most-used-languages line that fits a fixed width
//!   • a bio that fits a fixed width
//!
//! Fetching happens strictly in order. Only the per-repository commit fetch
//! is allowed to fail without ending the run.

use crate::config::Config;
use crate::error::Result;
use crate::github::{Account, GithubClient, RepositorySummary};

pub const BIO_PLACEHOLDER: &str = "New user";
const ELLIPSIS: &str = "...";
const SEPARATOR: &str = ", ";

/// Snapshot handed to the renderer. Read-only once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stats {
    account: Account,
    stars: u64,
    commits_total: u64,
    languages: String,
    bio: String,
    skipped_repos: Vec<String>,
}

impl Stats {
    pub fn new(
        account: Account,
        stars: u64,
        commits_total: u64,
        languages: String,
        max_bio_len: usize,
    ) -> Self {
        let bio = format_bio(&account.bio, max_bio_len);
        Self {
            account,
            stars,
            commits_total,
            languages,
            bio,
            skipped_repos: Vec::new(),
        }
    }

    pub fn account(&self) -> &Account {
        &self.account
    }

    pub fn stars(&self) -> u64 {
        self.stars
    }

    pub fn commits_total(&self) -> u64 {
        self.commits_total
    }

    /// Comma-separated ranking, already fitted to the width cap.
    pub fn languages(&self) -> &str {
        &self.languages
    }

    /// Bio with placeholder and truncation applied.
    pub fn bio(&self) -> &str {
        &self.bio
    }

    /// Repositories whose commit history could not be fetched.
    pub fn skipped_repos(&self) -> &[String] {
        &self.skipped_repos
    }

    /// Plain-text report printed after the card is written.
    pub fn summary(&self) -> String {
        format!(
            "=== GitHub Profile Stats ===\n\
             Followers: {}\n\
             Following: {}\n\
             Public Repos: {}\n\
             Total Stars: {}\n\
             Total Commits: {}\n\
             Most Used Languages: {}\n\
             Bio: {}\n",
            self.account.followers,
            self.account.following,
            self.account.public_repos,
            self.stars,
            self.commits_total,
            self.languages,
            self.bio,
        )
    }
}

/// Per-language count of eligible repositories, in first-seen order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LanguageTally {
    entries: Vec<(String, u32)>,
}

impl LanguageTally {
    pub fn add(&mut self, language: &str) {
        match self.entries.iter_mut().find(|(name, _)| name == language) {
            Some((_, count)) => *count += 1,
            None => self.entries.push((language.to_string(), 1)),
        }
    }

    /// Languages by descending count. Equal counts keep first-seen order.
    pub fn ranked(&self) -> Vec<(&str, u32)> {
        let mut ranked: Vec<(&str, u32)> = self
            .entries
            .iter()
            .map(|(name, count)| (name.as_str(), *count))
            .collect();
        // sort_by is stable, which is what makes ties deterministic
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }

    /// Join ranked languages until the next one would overflow `max_len`.
    ///
    /// Single forward pass: the first language that doesn't fit ends the
    /// line, even if a shorter one further down would have.
    pub fn ranking_line(&self, max_len: usize) -> String {
        let mut out = String::new();
        let mut used = 0;

        for (i, (name, _)) in self.ranked().into_iter().enumerate() {
            let mut cost = name.chars().count();
            if i > 0 {
                cost += SEPARATOR.len();
            }
            if used + cost > max_len {
                break;
            }
            if i > 0 {
                out.push_str(SEPARATOR);
            }
            out.push_str(name);
            used += cost;
        }

        out
    }
}

/// Empty bios become the placeholder; long ones are cut and get an ellipsis.
pub fn format_bio(bio: &str, max_len: usize) -> String {
    let bio = if bio.is_empty() { BIO_PLACEHOLDER } else { bio };

    match bio.char_indices().nth(max_len) {
        Some((cut, _)) => format!("{}{ELLIPSIS}", &bio[..cut]),
        None => bio.to_string(),
    }
}

/// Result of walking the repository list.
#[derive(Debug, Default)]
pub struct RepoWalk {
    pub tally: LanguageTally,
    pub commits_total: u64,
    pub skipped: Vec<String>,
}

/// Runs the fetch sequence once and produces a [`Stats`].
pub struct StatsAggregator {
    client: GithubClient,
    config: Config,
}

impl StatsAggregator {
    pub fn new(client: GithubClient, config: Config) -> Self {
        Self { client, config }
    }

    pub async fn collect(&self) -> Result<Stats> {
        let login = self.config.username.as_str();

        tracing::info!(%login, "fetching user data");
        let account = self.client.account(login).await?;

        tracing::info!(%login, "fetching star count");
        let stars = self.client.star_total(login).await?;

        tracing::info!(%login, "fetching repositories");
        let repos = self.client.repositories(login).await?;

        tracing::info!(count = repos.len(), "counting commits and analyzing languages");
        let walk = self.walk_repositories(&repos).await;

        let languages = walk.tally.ranking_line(self.config.max_lang_len);
        let mut stats = Stats::new(
            account,
            stars,
            walk.commits_total,
            languages,
            self.config.max_bio_len,
        );
        stats.skipped_repos = walk.skipped;
        Ok(stats)
    }

    /// Tally languages and sum commit counts over eligible repositories.
    pub async fn walk_repositories(&self, repos: &[RepositorySummary]) -> RepoWalk {
        let mut walk = RepoWalk::default();

        for repo in repos.iter().filter(|r| r.is_eligible()) {
            if !repo.language.is_empty() && !self.config.is_excluded_language(&repo.language) {
                walk.tally.add(&repo.language);
            }

            match self.client.commit_count(repo).await {
                Ok(n) => walk.commits_total += n,
                Err(e) => {
                    // one bad repo shouldn't sink the card
                    tracing::warn!(repo = %repo.name, error = %e, "could not fetch commits");
                    walk.skipped.push(repo.name.clone());
                }
            }
        }

        walk
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tally(langs: &[&str]) -> LanguageTally {
        let mut t = LanguageTally::default();
        for l in langs {
            t.add(l);
        }
        t
    }

    fn tally_counts(counts: &[(&str, u32)]) -> LanguageTally {
        let mut t = LanguageTally::default();
        for (lang, n) in counts {
            for _ in 0..*n {
                t.add(lang);
            }
        }
        t
    }

    #[test]
    fn empty_bio_uses_placeholder() {
        assert_eq!(format_bio("", 45), "New user");
    }

    #[test]
    fn short_bio_is_untouched() {
        assert_eq!(format_bio("Hi", 45), "Hi");
        let exact = "a".repeat(45);
        assert_eq!(format_bio(&exact, 45), exact);
    }

    #[test]
    fn long_bio_is_cut_to_45_plus_ellipsis() {
        let bio = "x".repeat(80);
        let out = format_bio(&bio, 45);
        assert_eq!(out.len(), 48);
        assert!(out.ends_with("..."));
        assert_eq!(&out[..45], &bio[..45]);
    }

    #[test]
    fn bio_truncation_respects_char_boundaries() {
        let bio = "é".repeat(50);
        let out = format_bio(&bio, 45);
        assert_eq!(out.chars().count(), 48);
        assert!(out.starts_with(&"é".repeat(45)));
    }

    #[test]
    fn ranking_orders_by_count_then_first_seen() {
        let t = tally(&["Rust", "Go", "Go", "Python", "Rust", "Go", "C"]);
        assert_eq!(t.ranked(), vec![("Go", 3), ("Rust", 2), ("Python", 1), ("C", 1)]);
        assert_eq!(t.ranking_line(35), "Go, Rust, Python, C");
    }

    #[test]
    fn ranking_stops_at_first_overflow() {
        // "TypeScript, JavaScript, Python" is 30; ", Dockerfile" would make 42
        let t = tally_counts(&[
            ("TypeScript", 4),
            ("JavaScript", 3),
            ("Python", 2),
            ("Dockerfile", 1),
        ]);
        assert_eq!(t.ranking_line(35), "TypeScript, JavaScript, Python");

        // a later short name is not pulled in to fill the gap
        let mut t = t;
        t.add("C");
        assert_eq!(t.ranking_line(35), "TypeScript, JavaScript, Python");
    }

    #[test]
    fn ranking_line_fills_exactly_to_cap() {
        // 10 + 2 + 10 + 2 + 11 = 35
        let t = tally(&["AAAAAAAAAA", "AAAAAAAAAA", "BBBBBBBBBB", "CCCCCCCCCCC"]);
        let line = t.ranking_line(35);
        assert_eq!(line, "AAAAAAAAAA, BBBBBBBBBB, CCCCCCCCCCC");
        assert_eq!(line.len(), 35);
    }

    #[test]
    fn first_language_longer_than_cap_yields_empty_line() {
        let t = tally(&["A Very Long Language Name That Overflows"]);
        assert_eq!(t.ranking_line(35), "");
    }

    #[test]
    fn twenty_languages_keep_leading_subset() {
        let mut t = LanguageTally::default();
        // Lang00 appears 20 times, Lang01 19 times, ...
        for i in 0..20u32 {
            for _ in 0..(20 - i) {
                t.add(&format!("Lang{i:02}"));
            }
        }
        let line = t.ranking_line(35);
        // 6 + 8 * 4 = 38 > 35, so four names fit
        assert_eq!(line, "Lang00, Lang01, Lang02, Lang03");
        assert!(line.len() <= 35);

        let ranked = t.ranked();
        assert!(ranked.windows(2).all(|w| w[0].1 >= w[1].1));
    }

    #[test]
    fn repeated_language_is_counted_once_per_repo() {
        let t = tally(&["Go", "Go"]);
        assert_eq!(t.ranked(), vec![("Go", 2)]);
        assert_eq!(LanguageTally::default().ranking_line(35), "");
    }

    #[test]
    fn summary_lists_every_field() {
        let account = Account {
            login: "octocat".into(),
            followers: 10,
            following: 2,
            bio: String::new(),
            public_repos: 8,
        };
        let stats = Stats::new(account, 42, 120, "Rust, Go".into(), 45);
        let summary = stats.summary();
        assert!(summary.starts_with("=== GitHub Profile Stats ===\n"));
        assert!(summary.contains("Followers: 10\n"));
        assert!(summary.contains("Following: 2\n"));
        assert!(summary.contains("Public Repos: 8\n"));
        assert!(summary.contains("Total Stars: 42\n"));
        assert!(summary.contains("Total Commits: 120\n"));
        assert!(summary.contains("Most Used Languages: Rust, Go\n"));
        assert!(summary.ends_with("Bio: New user\n"));
    }
}
