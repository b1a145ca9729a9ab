use du_scraper::config::AthleticsConfig;
use du_scraper::records::AthleticEventRecord;
use du_scraper::scrapers::athletics::AthleticsScraper;

const SCHEDULE_PAGE: &str = "
<div class=\"sidearm-schedule-games-container\">
  <div class=\"sidearm-schedule-game-row\">
    <div class=\"sidearm-schedule-game-opponent-date\">Aug 21\n\t(Thu)</div>
    <div class=\"sidearm-schedule-game-opponent-name\">Gonzaga</div>
    <div class=\"sidearm-schedule-game-location\">Denver, Colo.</div>
  </div>
  <div class=\"sidearm-schedule-game-row\">
    <div class=\"sidearm-schedule-game-opponent-date\">Aug 25 (Mon)</div>
    <div class=\"sidearm-schedule-game-opponent-name\">Seattle U</div>
  </div>
</div>
";

#[test]
fn one_record_per_schedule_row() {
    let scraper = AthleticsScraper::new(AthleticsConfig::default());
    let events = scraper.parse_events(SCHEDULE_PAGE).unwrap();

    assert_eq!(
        events,
        vec![
            AthleticEventRecord {
                date: "Aug 21(Thu)".to_string(),
                opponent: "Gonzaga".to_string(),
                location: "Denver, Colo.".to_string(),
            },
            AthleticEventRecord {
                date: "Aug 25 (Mon)".to_string(),
                opponent: "Seattle U".to_string(),
                location: String::new(),
            },
        ]
    );
}

#[test]
fn rows_outside_the_games_container_are_ignored() {
    let page = "
    <div class=\"sidearm-schedule-game-row\">
      <div class=\"sidearm-schedule-game-opponent-name\">Orphan Row</div>
    </div>
    ";
    let scraper = AthleticsScraper::new(AthleticsConfig::default());
    assert!(scraper.parse_events(page).unwrap().is_empty());
}
