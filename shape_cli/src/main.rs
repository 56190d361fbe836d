//! # Shapecalc CLI Application
//!
//! Terminal-based interface for the shape_core geometry types. Prompts for
//! cylinder dimensions, reports the derived quantities, and finishes with a
//! JSON dump of the value.

use std::io::{self, BufRead, Write};

use shape_core::{Circle, Cylinder};

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn prompt_text(prompt: &str, default: &str) -> String {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default.to_string();
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default.to_string();
    }

    let trimmed = input.trim();
    if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    }
}

fn main() {
    println!("Shapecalc CLI - Cylinder Geometry Calculator");
    println!("============================================");
    println!();

    let height = prompt_f64("Enter cylinder height [1.0]: ", Cylinder::DEFAULT_HEIGHT);
    let radius = prompt_f64("Enter base radius [1.0]: ", Circle::DEFAULT_RADIUS);
    let color = prompt_text("Enter color [red]: ", Circle::DEFAULT_COLOR);

    let cylinder = Cylinder::new(height).with_radius(radius).with_color(color);

    if let Err(e) = cylinder.validate() {
        eprintln!("Error: {}", e);
        if let Ok(json) = serde_json::to_string_pretty(&e) {
            eprintln!();
            eprintln!("Error JSON:");
            eprintln!("{}", json);
        }
        std::process::exit(1);
    }

    println!();
    println!("═══════════════════════════════════════");
    println!("  CYLINDER GEOMETRY RESULTS");
    println!("═══════════════════════════════════════");
    println!();
    println!("Input:");
    println!("  Height: {:.3}", cylinder.height());
    println!("  Radius: {:.3}", cylinder.radius());
    println!("  Color:  {}", cylinder.color());
    println!();
    println!("Derived:");
    println!("  Base circumference: {:.4}", cylinder.base().circumference());
    println!("  Base area:          {:.4}", cylinder.base_area());
    println!("  Lateral area:       {:.4}", cylinder.lateral_area());
    println!("  Total surface area: {:.4}", cylinder.area());
    println!("  Volume:             {:.4}", cylinder.volume());
    println!();
    println!("Display form:");
    println!("  {}", cylinder);
    println!("═══════════════════════════════════════");

    println!();
    println!("JSON Output (for LLM/API use):");
    if let Ok(json) = serde_json::to_string_pretty(&cylinder) {
        println!("{}", json);
    }
}
