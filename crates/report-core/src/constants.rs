/// Report service constants

/// Title used for the HTML document and the PDF header
pub const REPORT_TITLE: &str = "Business A.I. Insights Report";

/// File name requested from the PDF service
pub const PDF_FILE_NAME: &str = "report.pdf";

/// Body of `GET /`
pub const LIVENESS_MESSAGE: &str = "API is online!";

/// Substituted into the prompt when no additional information was submitted
pub const NO_ADDITIONAL_INFO: &str = "None provided";

pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// Sample report served in canned mode
pub const CANNED_REPORT: &str = "# Business A.I. Insights Report

## Objective
Use A.I. to grow sales and improve customer service over the next one to three months.

---

## Key Opportunities

1. **Personalised Marketing**
   - Segment customers by purchase history and browsing behaviour.
   - Run targeted email and social campaigns for each segment.

2. **Customer Service Assistants**
   - Answer routine questions with a chatbot trained on your FAQ.
   - Route complex requests to staff with the conversation attached.

3. **Demand Forecasting**
   - Forecast demand from historical sales to plan stock and promotions.

4. **Feedback Analysis**
   - Apply sentiment analysis to reviews, surveys and social mentions.
   - Feed recurring pain points back into products and processes.

## Implementation Timeline

### Month 1
- Select tools and gather customer data.

### Month 2
- Launch the chatbot and build customer segments.

### Month 3
- Roll out campaigns and start the feedback loop.

---

## Conclusion
A focused rollout of personalised marketing, automated support and analytics puts the business in a strong position to lift sales and customer satisfaction.";
