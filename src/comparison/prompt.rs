use serde::{Deserialize, Serialize};

/// The hostel fields the model is shown.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HostelSummary {
    pub name: String,
    pub price_per_night: f64,
    pub rating: f64,
    pub facilities: Vec<String>,
    pub description: String,
    pub address: String,
}

const COMPARISON_REPLY_SHAPE: &str = r#"{
    "recommendation": "A short summary recommendation statement.",
    "comparison_table": [
        {
            "feature": "Name of feature or advantage (e.g., 'Cheaper Price', 'Better Rating', 'Free Wifi')",
            "hostel1_has": true/false (true if Hotel 1 is better or has the feature),
            "hostel2_has": true/false (true if Hotel 2 is better or has the feature),
            "details": "Short explanation (e.g., '$50 vs $75')"
        }
    ],
    "detailed_analysis": "A detailed text analysis explaining the differences."
}"#;

const HOSTEL_REPLY_SHAPE: &str = r#"{
    "summary": "A 2-3 sentence summary of the hostel.",
    "pros": ["Advantage 1", "Advantage 2", "Advantage 3", "Advantage 4"],
    "cons": ["Disadvantage 1", "Disadvantage 2", "Disadvantage 3"]
}"#;

pub const SYSTEM_PROMPT: &str = "You are a helpful assistant that outputs strict JSON.";

fn hostel_block(label: &str, hostel: &HostelSummary) -> String {
    format!(
        "{label}: {name}\nData:\n- Price: ${price}\n- Rating: {rating}/10\n- Facilities: {facilities}\n- Description: {description}\n",
        name = hostel.name,
        price = hostel.price_per_night,
        rating = hostel.rating,
        facilities = hostel.facilities.join(", "),
        description = hostel.description,
    )
}

/// Instruction asking for a strict-JSON comparison of two hostels.
pub fn comparison_prompt(first: &HostelSummary, second: &HostelSummary) -> String {
    let mut prompt = String::from(
        "You are an AI travel assistant specializing in hostels. Compare the following two hostels.\n\n",
    );
    prompt.push_str(&hostel_block("Hostel 1", first));
    prompt.push('\n');
    prompt.push_str(&hostel_block("Hostel 2", second));
    prompt.push_str("\nPlease provide a comparison in STRICT JSON format with the following structure:\n");
    prompt.push_str(COMPARISON_REPLY_SHAPE);
    prompt.push_str(
        "\nCreate at least 5-6 comparison points covering Price, Rating, Cleanliness, Location (infer), Facilities, and Atmosphere.\n\
         Ensure strict JSON output. Do not include markdown code blocks (```json) or introductory text. Just the JSON string.\n",
    );
    prompt
}

/// Instruction asking for a strict-JSON summary with pros and cons of one hostel.
pub fn hostel_prompt(hostel: &HostelSummary) -> String {
    format!(
        "You are an AI travel assistant. Analyze the following hostel and provide a summary, list of advantages (pros), and list of disadvantages (cons).\n\n\
         Hostel: {name}\nPrice: ${price}\nRating: {rating}/10\nFacilities: {facilities}\nDescription: {description}\nAddress: {address}\n\n\
         Please provide the output in STRICT JSON format with the following structure:\n{shape}\n\
         Base the pros and cons on the price, rating, facilities, and description.\n\
         Ensure strict JSON output. Do not include markdown code blocks.\n",
        name = hostel.name,
        price = hostel.price_per_night,
        rating = hostel.rating,
        facilities = hostel.facilities.join(", "),
        description = hostel.description,
        address = hostel.address,
        shape = HOSTEL_REPLY_SHAPE,
    )
}
