use contix::document::{load_conti, parse_conti, Cut, Document, Scene};
use std::path::Path;

fn load_fixture() -> Document {
    load_conti(Path::new("tests/fixtures/sample-conti.js")).expect("Failed to load fixture")
}

#[cfg(test)]
mod fixture_tests {
    use super::*;

    #[test]
    fn test_title_and_duration() {
        let document = load_fixture();
        assert_eq!(document.title, "기와집 줄콘티");
        assert_eq!(document.total_duration, "약 1분 10초");
    }

    #[test]
    fn test_scenes_in_source_order() {
        let document = load_fixture();
        let ids: Vec<&str> = document.scenes.iter().map(|s| s.scene_id.as_str()).collect();
        assert_eq!(ids, vec!["S1", "S2", "S3"]);
        assert_eq!(document.scenes[0].heading, "기와집 앞 — 새벽");
        assert_eq!(document.scenes[1].heading, "빈 마당");
    }

    #[test]
    fn test_cuts_in_source_order_and_scoped() {
        let document = load_fixture();
        let s1: Vec<&str> = document.scenes[0]
            .cuts
            .iter()
            .map(|c| c.cut_id.as_str())
            .collect();
        assert_eq!(s1, vec!["S1-C1", "S1-C2", "S1-C3"]);
        assert!(document.scenes[1].cuts.is_empty());
        assert_eq!(document.scenes[2].cuts.len(), 1);
        assert_eq!(document.cut_count(), 4);
    }

    #[test]
    fn test_mixed_quote_styles() {
        let document = load_fixture();
        let cuts = &document.scenes[0].cuts;
        assert_eq!(cuts[0].visual, "안개 낀 기와집 전경\n처마 끝에 맺힌 이슬");
        assert_eq!(cuts[0].dialogue, "");
        assert_eq!(cuts[1].visual, "문고리를 잡는 손");
        assert_eq!(cuts[2].visual, "마당을 가로지르는 그림자");
        assert_eq!(cuts[2].dialogue, "아이: \"누구세요?\"");
    }

    #[test]
    fn test_durations() {
        let document = load_fixture();
        assert_eq!(document.scenes[0].cuts[1].duration_sec, Some(6.5));
        assert_eq!(document.total_seconds(), 31.5);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(load_conti(Path::new("tests/fixtures/missing.js")).is_err());
    }
}

#[cfg(test)]
mod scoping_tests {
    use super::*;

    #[test]
    fn test_cut_after_next_scene_marker_belongs_to_next_scene() {
        let text = "scene_id: 'S1', heading: 'a', \
                    scene_id: 'S2', heading: 'b', cut_id: 'S1-C1', visual: 'stray'";
        let document = parse_conti(text);
        assert!(document.scenes[0].cuts.is_empty());
        assert_eq!(document.scenes[1].cuts.len(), 1);
        assert_eq!(document.scenes[1].cuts[0].visual, "stray");
    }

    #[test]
    fn test_heading_is_not_borrowed_from_next_scene() {
        let document = parse_conti("scene_id: 'S1', scene_id: 'S2', heading: 'second'");
        assert_eq!(document.scenes[0].heading, "");
        assert_eq!(document.scenes[1].heading, "second");
    }

    #[test]
    fn test_surrounding_syntax_is_ignored() {
        // Not valid in any grammar; markers alone drive extraction.
        let text = "<<< scene_id: 'S7' ;;; heading: `밤` ))) cut_id: 'S7-C1' visual: '달빛'";
        let document = parse_conti(text);
        assert_eq!(document.scenes[0].scene_id, "S7");
        assert_eq!(document.scenes[0].heading, "밤");
        assert_eq!(document.scenes[0].cuts[0].visual, "달빛");
    }
}

#[cfg(test)]
mod escape_tests {
    use super::*;

    fn dialogue_of(source: &str) -> String {
        let text = format!("scene_id: 'S1' cut_id: 'S1-C1' {source}");
        parse_conti(&text).scenes[0].cuts[0].dialogue.clone()
    }

    #[test]
    fn test_single_quoted_escapes() {
        assert_eq!(dialogue_of(r"dialogue: 'don\'t\ngo'"), "don't\ngo");
    }

    #[test]
    fn test_double_quoted_escapes() {
        assert_eq!(dialogue_of(r#"dialogue: "say \"hi\"\nnow""#), "say \"hi\"\nnow");
    }

    #[test]
    fn test_backtick_escapes() {
        assert_eq!(dialogue_of(r"dialogue: `a \`b\`\nc`"), "a `b`\nc");
    }
}

#[test]
fn test_end_to_end_example() {
    let text = r#"
        scene_id: 'S1', heading: '기와집 앞',
        cuts: [
            { cut_id: 'S1-C1', visual: '와이드 샷', dialogue: '' },
            { cut_id: 'S1-C2', visual: '클로즈업', dialogue: '"간다"' },
        ]
    "#;

    let document = parse_conti(text);

    assert_eq!(
        document.scenes,
        vec![Scene {
            scene_id: "S1".to_string(),
            heading: "기와집 앞".to_string(),
            cuts: vec![
                Cut::new("S1-C1", "와이드 샷", ""),
                Cut::new("S1-C2", "클로즈업", "\"간다\""),
            ],
        }]
    );
}

#[test]
fn test_json_dump_shape() {
    let document = load_fixture();
    let json = serde_json::to_value(&document).expect("Failed to serialize");
    assert_eq!(json["scenes"][0]["scene_id"], "S1");
    assert_eq!(json["scenes"][0]["cuts"][1]["duration_sec"], 6.5);
    assert!(json["scenes"][2]["cuts"][0].get("duration_sec").is_some());
}
