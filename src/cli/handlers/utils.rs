use colored::Colorize;

use crate::model::{GenerateResponse, JiraStory, StoryDetails};

pub fn print_story_list(stories: &[JiraStory]) {
    if stories.is_empty() {
        println!("No stories found.");
        return;
    }

    for story in stories {
        println!("{} {}", story.key.cyan(), story.summary);
    }
}

pub fn print_story_details(details: &StoryDetails) {
    println!("{} {}", details.key.cyan().bold(), details.title.bold());

    if !details.description.is_empty() {
        println!("\n{}", "Description".bold());
        println!("{}", details.description);
    }

    println!("\n{}", "Acceptance Criteria".bold());
    if details.acceptance_criteria.is_empty() {
        println!("{}", "(none)".dimmed());
    } else {
        println!("{}", details.acceptance_criteria);
    }
}

pub fn print_test_cases(response: &GenerateResponse) {
    if response.cases.is_empty() {
        println!("No test cases generated.");
        return;
    }

    for case in &response.cases {
        println!("{} {} [{}]", case.id.cyan(), case.title.bold(), case.category.blue());
        for (i, step) in case.steps.iter().enumerate() {
            println!("  {}. {}", i + 1, step);
        }
        if let Some(ref data) = case.test_data {
            println!("  Data:     {}", data);
        }
        println!("  Expected: {}", case.expected_result.green());
    }

    let model = response.model.as_deref().unwrap_or("unknown model");
    println!(
        "\n{} cases from {} ({} prompt / {} completion tokens)",
        response.cases.len(),
        model.dimmed(),
        response.prompt_tokens,
        response.completion_tokens
    );
}
