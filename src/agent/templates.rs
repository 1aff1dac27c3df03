//! Reply texts for every intent.

pub const CALCULATION_FOLLOW_UP: &str = "I can help you with more complex calculations, statistical analysis, or data processing. Just ask!";

pub const CALCULATION_HELP: &str = "I can help you with calculations! Try asking me to:
• Perform arithmetic operations
• Calculate percentages
• Solve equations
• Analyze numerical data

What specific calculation do you need?";

pub const CODE_PYTHON: &str = r#"Here's a Python example:

```python
def fibonacci(n):
    if n <= 1:
        return n
    return fibonacci(n-1) + fibonacci(n-2)

# Generate first 10 Fibonacci numbers
for i in range(10):
    print(f"F({i}) = {fibonacci(i)}")
```

I can help you with:
• Writing functions and classes
• Debugging code
• Optimizing algorithms
• Explaining code concepts
• Creating full applications"#;

pub const CODE_JAVASCRIPT: &str = r#"Here's a JavaScript example:

```javascript
// Async function to fetch data
async function fetchData(url) {
    try {
        const response = await fetch(url);
        const data = await response.json();
        return data;
    } catch (error) {
        console.error('Error:', error);
    }
}
```

I can assist with modern JavaScript, React, Node.js, and more!"#;

pub const CODE_MENU: &str = "I can help you with code in multiple languages:

• Python - Data science, automation, web development
• JavaScript/TypeScript - Web apps, Node.js, React
• HTML/CSS - Frontend design
• SQL - Database queries
• And many more!

What programming task can I help you with?";

pub const TRANSLATION: &str = "I can help with language translation tasks!

While I can't perform real-time translation in this demo, I can:
• Explain language concepts
• Help with grammar and syntax
• Provide common phrases
• Assist with language learning

What languages are you working with?";

pub const PLANNING: &str = "I can help you plan and organize tasks!

Here's a sample task breakdown approach:

1. **Define Goals** - What do you want to achieve?
2. **Break Down Tasks** - Divide into manageable steps
3. **Set Priorities** - Order by importance and urgency
4. **Allocate Time** - Estimate duration for each task
5. **Track Progress** - Monitor completion and adjust

I can help you:
• Create project plans
• Organize daily schedules
• Set up workflows
• Prioritize tasks
• Develop strategies

What would you like to plan or organize?";

pub const EMAIL: &str = "Here's a professional email template:

**Subject:** [Clear, Concise Subject Line]

Dear [Recipient Name],

I hope this message finds you well. I'm reaching out regarding [purpose of email].

[Main content - be clear and concise]

I would appreciate [specific request or action needed].

Thank you for your time and consideration.

Best regards,
[Your Name]

I can help you create:
• Business emails
• Creative content
• Reports and documentation
• Marketing copy
• Social media posts

What would you like me to help you write?";

pub const CONTENT_MENU: &str = "I can help you create various types of content:

• Professional emails and letters
• Blog posts and articles
• Marketing copy
• Social media content
• Technical documentation
• Creative writing
• Presentations
• Reports and summaries

What type of content do you need?";

pub const ANALYSIS: &str = "I can help you analyze data and information!

**Analysis Capabilities:**

📊 **Data Analysis**
• Statistical analysis
• Trend identification
• Pattern recognition
• Data interpretation

🔍 **Research Analysis**
• Information synthesis
• Comparative analysis
• Critical evaluation
• Summary generation

💡 **Decision Support**
• Pros and cons evaluation
• Risk assessment
• Option comparison
• Recommendation generation

What would you like me to analyze?";

pub const HELP: &str = "I'm here to help! Here's what I can do for you:

🤖 **Core Capabilities:**

1. **Information & Research**
   - Answer questions on various topics
   - Explain complex concepts
   - Provide detailed information

2. **Problem Solving**
   - Analytical thinking
   - Creative solutions
   - Step-by-step guidance

3. **Content Creation**
   - Writing assistance
   - Editing and proofreading
   - Content generation

4. **Technical Tasks**
   - Code writing and debugging
   - Algorithm explanation
   - Technical documentation

5. **Planning & Organization**
   - Task management
   - Project planning
   - Time optimization

What specific task can I help you with?";

pub fn calculation_result(result: impl std::fmt::Display) -> String {
    format!("The calculation result is: {result}\n\n{CALCULATION_FOLLOW_UP}")
}

/// Number of canned fallback paragraphs.
pub const GENERAL_VARIANTS: usize = 3;

/// Fallback paragraph `variant` (taken modulo [`GENERAL_VARIANTS`]) echoing `echo`.
pub fn general(variant: usize, echo: &str) -> String {
    match variant % GENERAL_VARIANTS {
        0 => format!(
            "I understand you're asking about: \"{echo}\"

Let me help you with that. Based on your query, I can provide information, assistance, or guidance. Could you provide more specific details about what you need?

I'm capable of:
• Answering questions with detailed explanations
• Providing step-by-step guidance
• Offering multiple perspectives
• Creating actionable plans
• Solving complex problems

How can I best assist you with this?"
        ),
        1 => format!(
            "Thank you for your question! I'm analyzing: \"{echo}\"

As your AI agent assistant, I can approach this in several ways:

1. **Direct Answer** - Provide immediate information
2. **Detailed Explanation** - Break down the concept
3. **Practical Examples** - Show real-world applications
4. **Step-by-Step Guide** - Walk through the process

Which approach would be most helpful for you?"
        ),
        _ => format!(
            "I'm here to help with: \"{echo}\"

Let me provide a comprehensive response. I can assist with:

✓ Research and information gathering
✓ Problem-solving and analysis
✓ Creative and technical tasks
✓ Planning and execution strategies
✓ Learning and skill development

What specific aspect would you like me to focus on?"
        ),
    }
}
