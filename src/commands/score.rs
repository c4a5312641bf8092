use crate::error::Result;
use crate::report::LabelCounts;
use crate::sentiment::{Lexicon, ScoredComment, score};

/// Score ad-hoc texts without touching the network
pub fn run(texts: &[String]) -> Result<()> {
    let lexicon = Lexicon::new();
    let scored = score(&lexicon, texts);

    for comment in &scored {
        println!("{:>+7.4}  {:<8}  {}", comment.compound, comment.label, comment.text);
    }

    if scored.len() > 1 {
        println!("\n{}", tally_line(&scored));
    }

    Ok(())
}

fn tally_line(scored: &[ScoredComment]) -> String {
    let counts = LabelCounts::tally(scored);
    format!(
        "Positive: {}  Negative: {}  Neutral: {}  Score: {:.2}%",
        counts.positive,
        counts.negative,
        counts.neutral,
        counts.net_score()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tally_line() {
        let lexicon = Lexicon::new();
        let texts = vec![
            "great video!".to_string(),
            "I hated this".to_string(),
            "it was fine".to_string(),
            "love it".to_string(),
        ];
        let scored = score(&lexicon, &texts);
        assert_eq!(
            tally_line(&scored),
            "Positive: 2  Negative: 1  Neutral: 1  Score: 25.00%"
        );
    }
}
