//! Basic usage of the analysis API

use vibhaga_api::{analyze_text, AnalyzeRequest, Config, MorphologyService};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Method 1: Convenience function with the built-in lexicon
    println!("=== Method 1: Convenience Function ===");
    println!("{}\n", analyze_text("ఇది ఒక పుస్తకం.")?);

    // Method 2: Request/response contract
    println!("=== Method 2: Requests ===");
    let service = MorphologyService::new()?;
    for word in ["పిల్లలు", "రామాలయం", "   "] {
        let response = service.handle(&AnalyzeRequest::new(word));
        println!("{}", serde_json::to_string(&response)?);
    }

    // Method 3: Structured segments
    println!("\n=== Method 3: Segments ===");
    for segment in service.analyze_word("సుదినము").segments() {
        println!("  {:<8} {}", segment.role.as_str(), segment.text);
    }

    // Method 4: Custom configuration
    println!("\n=== Method 4: Custom Configuration ===");
    let config = Config::builder()
        .lexicon("telugu")
        .max_sandhi_depth(8)
        .build()?;
    let service = MorphologyService::with_config(config)?;
    println!("{}", service.analyze("దేవాలయాలు, కొంచెంకొంచెం"));

    Ok(())
}
