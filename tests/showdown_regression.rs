use poker_showdown::hand::HandError;
use poker_showdown::showdown::{best_hands, best_hands_batch, ShowdownError};

#[test]
fn single_hand_always_wins() {
    assert_eq!(best_hands(&["4S,5S,7H,8D,JC"]).unwrap(), vec!["4S,5S,7H,8D,JC"]);
}

#[test]
fn highest_card_wins_outright() {
    let winners = best_hands(&["2S,4C,7S,9H,10H", "3S,4S,5D,6H,JH"]).unwrap();
    assert_eq!(winners, vec!["3S,4S,5D,6H,JH"]);
}

#[test]
fn identical_ranks_in_other_suits_tie_in_input_order() {
    let hands = ["4D,5S,6S,8D,3C", "2S,4C,7S,9H,10H", "3S,4S,5D,6H,JH", "3H,4H,5C,6C,JD"];
    let winners = best_hands(&hands).unwrap();
    assert_eq!(winners, vec!["3S,4S,5D,6H,JH", "3H,4H,5C,6C,JD"]);
}

#[test]
fn winners_echo_input_formatting() {
    let winners = best_hands(&["2S, 4C, 7S, 9H, 10H", "2H,3H,4D,5C,7S"]).unwrap();
    assert_eq!(winners, vec!["2S, 4C, 7S, 9H, 10H"]);
}

#[test]
fn higher_pair_beats_lower_pair() {
    let winners = best_hands(&["4S,2H,6S,2D,JH", "2S,4H,6C,4D,JD"]).unwrap();
    assert_eq!(winners, vec!["2S,4H,6C,4D,JD"]);
}

#[test]
fn pair_kicker_breaks_ties() {
    let winners = best_hands(&["4H,4S,AH,JC,3D", "4C,4D,AS,5D,6C"]).unwrap();
    assert_eq!(winners, vec!["4H,4S,AH,JC,3D"]);
}

#[test]
fn two_pair_ordering_high_then_low_then_kicker() {
    let winners = best_hands(&["5C,5D,9H,9S,2C", "5H,5S,8D,8C,AC"]).unwrap();
    assert_eq!(winners, vec!["5C,5D,9H,9S,2C"]);

    let winners = best_hands(&["2S,8H,2D,8D,3H", "4S,5H,4C,8S,5D"]).unwrap();
    assert_eq!(winners, vec!["2S,8H,2D,8D,3H"]);

    let winners = best_hands(&["JD,QH,JS,8D,QC", "JS,QS,JC,2D,QD"]).unwrap();
    assert_eq!(winners, vec!["JD,QH,JS,8D,QC"]);
}

#[test]
fn trips_order_by_trip_rank() {
    let winners = best_hands(&["2S,8H,2H,8D,JH", "4S,5H,4C,8S,4H"]).unwrap();
    assert_eq!(winners, vec!["4S,5H,4C,8S,4H"]);
}

#[test]
fn wheel_loses_to_six_high_straight() {
    let winners = best_hands(&["AC,2D,3H,4S,5C", "2C,3D,4H,5S,6C"]).unwrap();
    assert_eq!(winners, vec!["2C,3D,4H,5S,6C"]);
}

#[test]
fn wheel_beats_three_of_a_kind() {
    let winners = best_hands(&["4S,5H,4C,8D,4H", "4D,AH,3S,2D,5C"]).unwrap();
    assert_eq!(winners, vec!["4D,AH,3S,2D,5C"]);
}

#[test]
fn flush_order_by_kickers() {
    let winners = best_hands(&["4H,7H,8H,9H,6H", "2S,4S,5S,6S,7S"]).unwrap();
    assert_eq!(winners, vec!["4H,7H,8H,9H,6H"]);
}

#[test]
fn full_house_trips_decide_before_pair() {
    let winners = best_hands(&["2C,2D,2H,KS,KC", "3C,3D,3H,9S,9C"]).unwrap();
    assert_eq!(winners, vec!["3C,3D,3H,9S,9C"]);
}

#[test]
fn quads_kicker_decides() {
    let winners = best_hands(&["3S,3H,2S,3D,3C", "3S,3H,4S,3D,3C"]).unwrap();
    assert_eq!(winners, vec!["3S,3H,4S,3D,3C"]);
}

#[test]
fn straight_flush_ordering() {
    let winners = best_hands(&["4H,6H,7H,8H,5H", "5S,7S,8S,9S,6S"]).unwrap();
    assert_eq!(winners, vec!["5S,7S,8S,9S,6S"]);
}

#[test]
fn royal_flush_beats_straight_flush() {
    let winners = best_hands(&["9C,10C,JC,QC,KC", "10D,JD,QD,KD,AD"]).unwrap();
    assert_eq!(winners, vec!["10D,JD,QD,KD,AD"]);
}

#[test]
fn empty_input_fails() {
    let none: Vec<String> = Vec::new();
    assert_eq!(best_hands(&none), Err(ShowdownError::EmptyInput));
}

#[test]
fn malformed_hands_never_produce_winners() {
    for token in ["1S,4C,7S,9H,10H", "2S,4C,7S,9H,10H,JD", "2S,4C,7S,9H,10X", "2S,4C,7S,9H,2S"] {
        let err = best_hands(&["3S,4S,5D,6H,JH", token]).unwrap_err();
        assert!(matches!(err, ShowdownError::MalformedHand(_)), "{token}: {err}");
    }
    let err = best_hands(&["2S,4C,7S,9H"]).unwrap_err();
    assert_eq!(err, ShowdownError::MalformedHand(HandError::CardCount(4)));
}

#[test]
fn repeated_calls_are_independent() {
    let first = best_hands(&["2S,4C,7S,9H,10H", "3S,4S,5D,6H,JH"]).unwrap();
    let second = best_hands(&["4D,5S,6S,8D,3C"]).unwrap();
    let again = best_hands(&["2S,4C,7S,9H,10H", "3S,4S,5D,6H,JH"]).unwrap();
    assert_eq!(first, again);
    assert_eq!(second, vec!["4D,5S,6S,8D,3C"]);
}

#[test]
fn batch_matches_individual_calls() {
    let tables = vec![
        vec!["2S,4C,7S,9H,10H".to_string(), "3S,4S,5D,6H,JH".to_string()],
        vec!["AC,2D,3H,4S,5C".to_string(), "2C,3D,4H,5S,6C".to_string()],
        vec!["2S,4C,7S,9H".to_string()],
    ];
    let batch = best_hands_batch(&tables);
    let single: Vec<_> = tables.iter().map(|t| best_hands(t)).collect();
    assert_eq!(batch, single);
}
