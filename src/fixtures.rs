//! Hard-coded question/context fixtures for the QA demo
//!
//! Exactly two pairs exist, selected by the `--length` flag. The texts are
//! the ones the deployed models were benchmarked with; there is no per-run
//! variation.

use crate::config::SequenceLength;

/// A question/context pair used as the request payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fixture {
    /// Question posed to the model
    pub question: &'static str,
    /// Context passage the answer is extracted from
    pub context: &'static str,
}

/// Short pair sized for 16-token sequences
pub const SHORT: Fixture = Fixture {
    question: "Where do I live?",
    context: "My name is Wolfgang and I live in Berlin",
};

/// Long pair sized for 256-token sequences
pub const LONG: Fixture = Fixture {
    question: "Which name is also used to describe the Amazon rainforest in English?",
    context: "The Amazon rainforest (Portuguese: Floresta Amazônica or Amazônia; \
              Spanish: Selva Amazónica, Amazonía or usually Amazonia; French: \
              Forêt amazonienne; Dutch: Amazoneregenwoud), also known in English as \
              Amazonia or the Amazon Jungle, is a moist broadleaf forest that covers most \
              of the Amazon basin of South America. This basin encompasses 7,000,000 \
              square kilometres (2,700,000 sq mi), of which 5,500,000 square kilometres \
              (2,100,000 sq mi) are covered by the rainforest. This region includes \
              territory belonging to nine nations. The majority of the forest is \
              contained within Brazil, with 60% of the rainforest, followed by Peru with \
              13%, Colombia with 10%, and with minor amounts in Venezuela, Ecuador, \
              Bolivia, Guyana, Suriname and French Guiana. States or departments in four \
              nations contain \"Amazonas\" in their names. The Amazon represents over \
              half of the planet's remaining rainforests, and comprises the largest and \
              most biodiverse tract of tropical rainforest in the world, with an \
              estimated 390 billion individual trees divided into 16,000 species.",
};

impl Fixture {
    /// Returns the fixture pair for the requested sequence length
    pub fn for_length(length: SequenceLength) -> &'static Fixture {
        match length {
            SequenceLength::Short => &SHORT,
            SequenceLength::Long => &LONG,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_fixture_selected_for_16() {
        let fixture = Fixture::for_length(SequenceLength::Short);
        assert_eq!(fixture.question, "Where do I live?");
        assert_eq!(fixture.context, "My name is Wolfgang and I live in Berlin");
    }

    #[test]
    fn test_long_fixture_selected_for_256() {
        let fixture = Fixture::for_length(SequenceLength::Long);
        assert!(fixture
            .question
            .contains("Amazon rainforest in English"));
        assert!(fixture.context.starts_with("The Amazon rainforest"));
        assert!(fixture.context.ends_with("divided into 16,000 species."));
    }

    #[test]
    fn test_fixtures_are_distinct() {
        assert_ne!(SHORT, LONG);
    }
}
