//! Prompt construction for the transactions schema.
//!
//! The schema text and rule block are deliberately frozen: the model's output
//! quality depends on the exact wording, so any edit here changes observable
//! behavior. Keep the column list in sync with the `Tag` examples below.

/// Fixed description of the one table the service knows about. Embedded
/// verbatim in every prompt so the model grounds column names and value
/// conventions.
pub const TABLE_SCHEMA: &str = r#"Table: transactions
Columns:
- Amount (numeric)
- user_id
- Transaction_Type (debit/credit)
- Bank_Name (string)
- Card_Type (string - debit card/credit card)
- Paid_To (string - paid to whom)
- Merchant (string - company name)
- Transaction_Mode (string)
- Transaction_Date (format: dd/mm/yy)
- Reference_Number
- Tag (string - shopping, food, travel, entertainment, health, utilities, drinks, rent, groceries, education, services, gift, others)"#;

/// System instruction sent with every completion request.
pub const SYSTEM_PROMPT: &str =
    "You are a SQL expert. Generate only SQL queries without any explanations.";

/// Answer the model is told to give for questions that have nothing to do
/// with transactions. Passed through to callers verbatim.
pub const OFF_TOPIC_ANSWER: &str = "Not a transaction related question";

/// Build the full user prompt for one question. The question is interpolated
/// as-is; it is the model's job to cope with whatever the caller typed.
pub fn build_prompt(question: &str) -> String {
    format!(
        r#"Given this database schema:
{schema}

Convert this question to a SQL query: "{question}"

Important rules:
1. Respond only if the input is related to transactions
2. If the question is not related to transactions, respond with '{off_topic}'
3. If the question is related to transactions, generate the SQL query
4. Use proper date format (dd/mm/yy)
5. For spending queries, use Transaction_Type = 'debit'
6. Include relevant columns only
7. Use proper aggregations when needed (SUM, AVG, etc.)
8. Return only the SQL query, no explanations

Example categories in Tag column:
- shopping (for Amazon, retail stores)
- food (for restaurants, Zomato)
- drinks (for bars, beverages)
- travel (for transportation)
- entertainment (for movies, events)"#,
        schema = TABLE_SCHEMA,
        question = question,
        off_topic = OFF_TOPIC_ANSWER,
    )
}
