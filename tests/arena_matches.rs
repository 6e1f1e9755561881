//! Self-play matches between difficulty levels

use xo::{
    Error,
    ai::{Difficulty, MinimaxSearch},
    engine::Event,
    pipeline::{Arena, MatchConfig, MatchResult, ProgressObserver, TranscriptObserver},
    tictactoe::{Evaluation, Evaluator, Token},
};

fn search() -> &'static MinimaxSearch {
    MinimaxSearch::shared().unwrap()
}

fn run(config: MatchConfig) -> MatchResult {
    Arena::new(config, search()).run().unwrap()
}

#[test]
fn experts_always_squash() {
    let result = run(
        MatchConfig::new(Difficulty::Expert, Difficulty::Expert)
            .with_games(20)
            .with_seed(1)
            .with_alternate_first(true),
    );
    assert_eq!(result.total_games(), 20);
    assert_eq!(result.squashed, 20);
    assert_eq!(result.x_wins + result.o_wins, 0);
}

#[test]
fn expert_never_loses_to_novice() {
    let result = run(
        MatchConfig::new(Difficulty::Novice, Difficulty::Expert)
            .with_games(50)
            .with_seed(2),
    );
    assert_eq!(result.x_wins, 0);
    assert!(result.o_wins > 0);

    let result = run(
        MatchConfig::new(Difficulty::Expert, Difficulty::Intermediate)
            .with_games(50)
            .with_seed(3)
            .with_first_player(Token::O),
    );
    assert_eq!(result.o_wins, 0);
}

#[test]
fn same_seed_replays_the_same_match() {
    let config = MatchConfig::new(Difficulty::Novice, Difficulty::Intermediate)
        .with_games(25)
        .with_seed(99);
    assert_eq!(run(config.clone()), run(config));
}

#[test]
fn first_player_alternates_between_games() {
    let result = run(
        MatchConfig::new(Difficulty::Novice, Difficulty::Novice)
            .with_games(4)
            .with_seed(4)
            .with_first_player(Token::O)
            .with_alternate_first(true),
    );
    let firsts: Vec<Token> = result.games.iter().map(|g| g.first_player).collect();
    assert_eq!(firsts, [Token::O, Token::X, Token::O, Token::X]);
}

#[test]
fn transcripts_follow_the_event_vocabulary() {
    let result = run(
        MatchConfig::new(Difficulty::Novice, Difficulty::Novice)
            .with_games(10)
            .with_seed(5),
    );
    for (n, game) in result.games.iter().enumerate() {
        assert_eq!(game.game_num, n);

        let expected_start = if n == 0 {
            Event::GameStarted { kind: None }
        } else {
            Event::GameStarted {
                kind: Some(xo::engine::StartKind::ContinuePlaying),
            }
        };
        assert_eq!(game.events.first(), Some(&expected_start));
        assert_eq!(game.events.last().map(Event::name), Some("game_over"));
        assert!(game.events.iter().all(|e| e.name() != "invalid_move"));

        let last_move = game.events.last().and_then(Event::last_move).unwrap();
        let evaluation = Evaluator::analyze(&game.grid(), last_move.turn).unwrap();
        assert!(evaluation.is_game_over());
        assert_ne!(evaluation, Evaluation::Ok);
        if let Some(winner) = game.winner {
            assert_eq!(winner, last_move.turn);
        } else {
            assert!(game.grid().is_full());
        }
    }
}

#[test]
fn results_round_trip_through_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("match.json");
    let result = run(
        MatchConfig::new(Difficulty::Intermediate, Difficulty::Novice)
            .with_games(8)
            .with_seed(6),
    );
    result.save(&path).unwrap();
    let loaded = MatchResult::load(&path).unwrap();
    assert_eq!(loaded, result);
    assert_eq!(loaded.config.seed, Some(6));
}

#[test]
fn loading_a_missing_file_reports_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.json");
    let err = MatchResult::load(&path).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
    assert!(err.to_string().contains("missing.json"));
}

#[test]
fn observers_see_every_game() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("games.jsonl");
    let result = Arena::new(
        MatchConfig::new(Difficulty::Novice, Difficulty::Expert)
            .with_games(6)
            .with_seed(7),
        search(),
    )
    .with_observer(Box::new(ProgressObserver::hidden()))
    .with_observer(Box::new(TranscriptObserver::new(&path).unwrap()))
    .run()
    .unwrap();

    let lines = std::fs::read_to_string(&path).unwrap();
    assert_eq!(lines.lines().count(), result.total_games());
}
