//! Response text for each agent.

use super::ResearchFigures;

pub(super) fn roadmap(product: &str) -> String {
    format!(
        "🗺️ PRODUCT ROADMAP: {product}

📋 EXECUTIVE SUMMARY:
Strategic roadmap focusing on user-centric development and scalable growth.

🎯 QUARTERLY PHASES:

Q1 - FOUNDATION PHASE:
✅ Core Architecture Setup
✅ User Authentication System
✅ Basic UI/UX Framework
✅ MVP Feature Set
✅ Initial Security Implementation

Q2 - DEVELOPMENT PHASE:
🔄 Advanced Feature Development
🔄 Performance Optimization
🔄 User Feedback Integration
🔄 Beta Testing Program
🔄 Mobile Responsiveness

Q3 - LAUNCH PHASE:
📅 Production Deployment
📅 Marketing Campaign Launch
📅 User Onboarding Flow
📅 Customer Support Setup
📅 Analytics Implementation

Q4 - GROWTH PHASE:
📅 Feature Enhancement Based on Data
📅 Scaling Infrastructure
📅 Market Expansion Strategy
📅 Partnership Development
📅 Advanced Analytics & AI

🎯 KEY SUCCESS METRICS:
• User Adoption Rate: Target 80% by Q2
• Performance Benchmark: <2 second load times
• Quality Assurance: >95% uptime
• User Satisfaction: >4.5/5 rating
• Revenue Target: Break-even by Q3

💡 STRATEGIC PRIORITIES:
1. User Experience First
2. Data-Driven Decisions
3. Scalable Architecture
4. Market Responsiveness
5. Continuous Innovation"
    )
}

pub(super) fn research(topic: &str, figures: &ResearchFigures) -> String {
    let ResearchFigures {
        user_interest,
        competition_score,
        market_size,
        growth_rate,
    } = figures;

    format!(
        "🔍 MARKET RESEARCH ANALYSIS: {topic}

📊 MARKET OVERVIEW:
• Total Market Size: {market_size}
• Annual Growth Rate: {growth_rate}
• Market Maturity: Growth Stage
• User Interest Level: {user_interest}%

🎯 TARGET DEMOGRAPHICS:
• Primary: Tech-savvy professionals (25-40 years)
• Secondary: Early adopters and innovators
• Key Segments: B2B and B2C markets
• Mobile vs Desktop: 70% mobile preference

🏆 COMPETITIVE LANDSCAPE:
• Market Leaders: 3-4 dominant players
• Competition Score: {competition_score}/10
• Market Gaps: User experience, pricing flexibility
• Differentiation Opportunities: AI integration

💰 MARKET OPPORTUNITY:
• Revenue Potential: High growth trajectory
• Monetization Models: Subscription, freemium
• Break-even Timeline: 12-18 months

📈 KEY TRENDS:
• Mobile-first approach is critical
• AI features in high demand
• Users prioritize simplicity
• Subscription models performing well

🚀 STRATEGIC RECOMMENDATIONS:
✅ Focus on MVP with core features first
✅ Implement freemium model for acquisition
✅ Prioritize mobile optimization
✅ Invest in AI-powered personalization
✅ Build strong integration ecosystem"
    )
}

pub(super) fn task_analysis(task_title: &str, priority: &str, effort: &str) -> String {
    format!(
        "📋 TASK ANALYSIS: {task_title}

🎯 PRIORITY ASSESSMENT: {priority}
⚡ EFFORT ESTIMATE: {effort} story points
📅 RECOMMENDED SPRINT: Next sprint
🔄 STATUS: Ready for development

💡 IMPLEMENTATION NOTES:
• Break down into smaller subtasks if needed
• Consider dependencies with other features
• Allocate adequate testing time
• Plan for user feedback collection

🔧 RECOMMENDED APPROACH:
• Start with MVP version
• Focus on core functionality first
• Implement proper error handling
• Add comprehensive unit tests"
    )
}
