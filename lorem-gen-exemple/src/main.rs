use lorem_gen_core::model::comma_rule::CommaRule;
use lorem_gen_core::model::word_bank;
use lorem_gen_core::{join_paragraphs, GenerationInput, Generator};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Usage: lorem-gen-exemple [paragraphs] [sentences] [seed]
    // Counts are clamped to [0, 100], non-numeric counts are read as 0
    let args: Vec<String> = std::env::args().skip(1).collect();
    let defaults = GenerationInput::default();
    let paragraphs = args.first().map_or(defaults.paragraphs(), |s| GenerationInput::parse_count(s));
    let sentences = args.get(1).map_or(defaults.sentences(), |s| GenerationInput::parse_count(s));
    let mut input = GenerationInput::with_counts(paragraphs, sentences);
    if let Some(seed) = args.get(2) {
        // Same seed, same document
        input.seed = Some(seed.parse()?);
    }

    println!("Word bank holds {} words, first is '{}'", word_bank::len(), word_bank::word(0).unwrap_or_default());

    let mut generator = Generator::from_input(&input);

    // A single sentence, between 8 and 15 words
    println!("Sentence: {}", generator.generate_sentence(8, 15)?);

    // Inverted bounds are rejected, never swapped
    match generator.generate_sentence(15, 8) {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("Rejected range: {e}"),
    }

    // Comma probability must be between 0.0 and 1.0
    match CommaRule::default().with_probability(2.0) {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("Rejected comma rule: {e}"),
    }

    // Always place a comma on long sentences
    generator.set_comma_rule(CommaRule::new(1.0, 10, 3)?);
    println!("Long sentence: {}", generator.generate_sentence(11, 14)?);
    generator.set_comma_rule(input.comma_rule());

    println!(
        "\n{} paragraphs of {} sentences:\n",
        input.paragraphs(),
        input.sentences()
    );
    let document = generator.generate(&input);
    println!("{}", join_paragraphs(&document));

    Ok(())
}
