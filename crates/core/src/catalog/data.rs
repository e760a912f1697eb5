//! Bundled soft-skills question set.
//!
//! Four categories, 50 questions: Communication (1-13), Leadership (14-25),
//! Stress Management (26-38) and Teamwork (39-50). Option weights run
//! 1 = low through 4 = excellent.

/// Static shape of one bundled question before validation.
pub(crate) struct BundledQuestion {
    pub id: u32,
    pub category: &'static str,
    pub prompt: &'static str,
    pub options: [(&'static str, u8); 4],
}

pub(crate) const BUNDLED_QUESTIONS: &[BundledQuestion] = &[
    BundledQuestion {
        id: 1,
        category: "Communication",
        prompt: "How comfortable are you expressing your ideas in a group setting?",
        options: [
            ("Very uncomfortable", 1),
            ("Somewhat uncomfortable", 2),
            ("Comfortable", 3),
            ("Very comfortable", 4),
        ],
    },
    BundledQuestion {
        id: 2,
        category: "Communication",
        prompt: "How often do you actively listen to others without interrupting?",
        options: [
            ("Rarely", 1),
            ("Sometimes", 2),
            ("Often", 3),
            ("Always", 4),
        ],
    },
    BundledQuestion {
        id: 3,
        category: "Communication",
        prompt: "How clearly can you explain complex concepts to others?",
        options: [
            ("Struggle significantly", 1),
            ("Manage with difficulty", 2),
            ("Explain fairly well", 3),
            ("Explain very clearly", 4),
        ],
    },
    BundledQuestion {
        id: 4,
        category: "Communication",
        prompt: "How well do you handle constructive criticism?",
        options: [
            ("Take it personally", 1),
            ("Feel defensive", 2),
            ("Accept it calmly", 3),
            ("Welcome and use it", 4),
        ],
    },
    BundledQuestion {
        id: 5,
        category: "Communication",
        prompt: "How effective are you at written communication (emails, reports)?",
        options: [
            ("Often unclear", 1),
            ("Somewhat clear", 2),
            ("Clear and concise", 3),
            ("Highly effective", 4),
        ],
    },
    BundledQuestion {
        id: 6,
        category: "Communication",
        prompt: "How well do you read non-verbal cues in conversations?",
        options: [
            ("Rarely notice", 1),
            ("Sometimes notice", 2),
            ("Usually notice", 3),
            ("Always attentive", 4),
        ],
    },
    BundledQuestion {
        id: 7,
        category: "Communication",
        prompt: "How comfortable are you giving presentations?",
        options: [
            ("Extremely anxious", 1),
            ("Nervous but manage", 2),
            ("Fairly comfortable", 3),
            ("Very confident", 4),
        ],
    },
    BundledQuestion {
        id: 8,
        category: "Communication",
        prompt: "How well do you adapt your communication style to different audiences?",
        options: [
            ("Use same style always", 1),
            ("Minimal adaptation", 2),
            ("Adapt moderately", 3),
            ("Adapt seamlessly", 4),
        ],
    },
    BundledQuestion {
        id: 9,
        category: "Communication",
        prompt: "How effectively do you resolve misunderstandings?",
        options: [
            ("Often struggle", 1),
            ("Eventually resolve", 2),
            ("Resolve efficiently", 3),
            ("Prevent and resolve expertly", 4),
        ],
    },
    BundledQuestion {
        id: 10,
        category: "Communication",
        prompt: "How open are you to different viewpoints?",
        options: [
            ("Stick to my views", 1),
            ("Somewhat open", 2),
            ("Open-minded", 3),
            ("Actively seek diverse views", 4),
        ],
    },
    BundledQuestion {
        id: 11,
        category: "Communication",
        prompt: "How well do you articulate your feelings and emotions?",
        options: [
            ("Very difficult", 1),
            ("Somewhat difficult", 2),
            ("Express adequately", 3),
            ("Express clearly", 4),
        ],
    },
    BundledQuestion {
        id: 12,
        category: "Communication",
        prompt: "How effectively do you use feedback to improve communication?",
        options: [
            ("Ignore feedback", 1),
            ("Consider sometimes", 2),
            ("Usually implement", 3),
            ("Actively seek and apply", 4),
        ],
    },
    BundledQuestion {
        id: 13,
        category: "Communication",
        prompt: "How well do you maintain professional relationships through communication?",
        options: [
            ("Often have conflicts", 1),
            ("Maintain basic relationships", 2),
            ("Build good relationships", 3),
            ("Excel at relationship building", 4),
        ],
    },
    BundledQuestion {
        id: 14,
        category: "Leadership",
        prompt: "How often do you take initiative in group projects?",
        options: [
            ("Never", 1),
            ("Occasionally", 2),
            ("Frequently", 3),
            ("Always lead", 4),
        ],
    },
    BundledQuestion {
        id: 15,
        category: "Leadership",
        prompt: "How well do you motivate others to achieve goals?",
        options: [
            ("Unable to motivate", 1),
            ("Motivate with difficulty", 2),
            ("Motivate effectively", 3),
            ("Inspire and energize", 4),
        ],
    },
    BundledQuestion {
        id: 16,
        category: "Leadership",
        prompt: "How do you handle decision-making under pressure?",
        options: [
            ("Freeze or avoid", 1),
            ("Make hasty decisions", 2),
            ("Decide thoughtfully", 3),
            ("Excel under pressure", 4),
        ],
    },
    BundledQuestion {
        id: 17,
        category: "Leadership",
        prompt: "How well do you delegate tasks to team members?",
        options: [
            ("Do everything myself", 1),
            ("Delegate reluctantly", 2),
            ("Delegate appropriately", 3),
            ("Empower others effectively", 4),
        ],
    },
    BundledQuestion {
        id: 18,
        category: "Leadership",
        prompt: "How do you respond when your leadership decisions are questioned?",
        options: [
            ("Become defensive", 1),
            ("Feel uncertain", 2),
            ("Listen and explain", 3),
            ("Welcome dialogue", 4),
        ],
    },
    BundledQuestion {
        id: 19,
        category: "Leadership",
        prompt: "How effectively do you set clear goals for your team?",
        options: [
            ("Goals are unclear", 1),
            ("Goals somewhat clear", 2),
            ("Set clear goals", 3),
            ("Set inspiring, clear goals", 4),
        ],
    },
    BundledQuestion {
        id: 20,
        category: "Leadership",
        prompt: "How well do you handle conflicts within your team?",
        options: [
            ("Avoid conflicts", 1),
            ("Struggle to resolve", 2),
            ("Mediate effectively", 3),
            ("Turn conflicts into growth", 4),
        ],
    },
    BundledQuestion {
        id: 21,
        category: "Leadership",
        prompt: "How do you balance being authoritative and approachable?",
        options: [
            ("Struggle with balance", 1),
            ("Lean too much one way", 2),
            ("Maintain good balance", 3),
            ("Master the balance", 4),
        ],
    },
    BundledQuestion {
        id: 22,
        category: "Leadership",
        prompt: "How well do you recognize and appreciate team members' contributions?",
        options: [
            ("Rarely acknowledge", 1),
            ("Occasionally recognize", 2),
            ("Regularly appreciate", 3),
            ("Consistently celebrate success", 4),
        ],
    },
    BundledQuestion {
        id: 23,
        category: "Leadership",
        prompt: "How do you handle failure or setbacks as a leader?",
        options: [
            ("Blame others", 1),
            ("Get discouraged", 2),
            ("Learn and move forward", 3),
            ("Turn failures into opportunities", 4),
        ],
    },
    BundledQuestion {
        id: 24,
        category: "Leadership",
        prompt: "How well do you mentor and develop others?",
        options: [
            ("Don't mentor", 1),
            ("Provide basic guidance", 2),
            ("Actively mentor", 3),
            ("Develop future leaders", 4),
        ],
    },
    BundledQuestion {
        id: 25,
        category: "Leadership",
        prompt: "How effectively do you communicate vision and direction?",
        options: [
            ("No clear vision", 1),
            ("Vision unclear to others", 2),
            ("Communicate vision well", 3),
            ("Inspire with compelling vision", 4),
        ],
    },
    BundledQuestion {
        id: 26,
        category: "Stress Management",
        prompt: "How well do you cope with tight deadlines?",
        options: [
            ("Overwhelmed and anxious", 1),
            ("Stressed but complete tasks", 2),
            ("Handle well with planning", 3),
            ("Thrive under deadlines", 4),
        ],
    },
    BundledQuestion {
        id: 27,
        category: "Stress Management",
        prompt: "How do you react to unexpected changes or challenges?",
        options: [
            ("Panic or freeze", 1),
            ("Feel anxious but adapt slowly", 2),
            ("Adapt reasonably well", 3),
            ("Embrace change confidently", 4),
        ],
    },
    BundledQuestion {
        id: 28,
        category: "Stress Management",
        prompt: "How well do you maintain work-life balance?",
        options: [
            ("No balance, always stressed", 1),
            ("Struggle to balance", 2),
            ("Maintain decent balance", 3),
            ("Excellent balance", 4),
        ],
    },
    BundledQuestion {
        id: 29,
        category: "Stress Management",
        prompt: "How do you handle criticism or negative feedback?",
        options: [
            ("Very stressed, take personally", 1),
            ("Feel upset but recover", 2),
            ("Handle constructively", 3),
            ("Use as growth opportunity", 4),
        ],
    },
    BundledQuestion {
        id: 30,
        category: "Stress Management",
        prompt: "How well do you manage multiple priorities simultaneously?",
        options: [
            ("Feel overwhelmed", 1),
            ("Manage with difficulty", 2),
            ("Prioritize effectively", 3),
            ("Excel at multitasking", 4),
        ],
    },
    BundledQuestion {
        id: 31,
        category: "Stress Management",
        prompt: "How often do you practice stress-relief techniques?",
        options: [
            ("Never", 1),
            ("Rarely", 2),
            ("Regularly", 3),
            ("Daily routine", 4),
        ],
    },
    BundledQuestion {
        id: 32,
        category: "Stress Management",
        prompt: "How well do you recognize your stress triggers?",
        options: [
            ("Unaware of triggers", 1),
            ("Somewhat aware", 2),
            ("Clearly identify triggers", 3),
            ("Proactively manage triggers", 4),
        ],
    },
    BundledQuestion {
        id: 33,
        category: "Stress Management",
        prompt: "How do you handle conflict in high-pressure situations?",
        options: [
            ("Avoid or escalate", 1),
            ("Struggle to manage", 2),
            ("Handle calmly", 3),
            ("De-escalate effectively", 4),
        ],
    },
    BundledQuestion {
        id: 34,
        category: "Stress Management",
        prompt: "How well do you maintain focus during stressful periods?",
        options: [
            ("Lose focus easily", 1),
            ("Focus wavers", 2),
            ("Maintain focus mostly", 3),
            ("Laser-focused always", 4),
        ],
    },
    BundledQuestion {
        id: 35,
        category: "Stress Management",
        prompt: "How do you recover after a stressful day?",
        options: [
            ("Carry stress for days", 1),
            ("Take time to recover", 2),
            ("Recover by next day", 3),
            ("Bounce back immediately", 4),
        ],
    },
    BundledQuestion {
        id: 36,
        category: "Stress Management",
        prompt: "How well do you ask for help when overwhelmed?",
        options: [
            ("Never ask for help", 1),
            ("Reluctant to ask", 2),
            ("Ask when necessary", 3),
            ("Proactively seek support", 4),
        ],
    },
    BundledQuestion {
        id: 37,
        category: "Stress Management",
        prompt: "How do you handle failure or mistakes under pressure?",
        options: [
            ("Dwell on mistakes", 1),
            ("Feel guilty, then move on", 2),
            ("Learn and improve", 3),
            ("Quick learner, resilient", 4),
        ],
    },
    BundledQuestion {
        id: 38,
        category: "Stress Management",
        prompt: "How well do you maintain positive attitude during challenges?",
        options: [
            ("Become negative", 1),
            ("Struggle to stay positive", 2),
            ("Mostly stay positive", 3),
            ("Always optimistic", 4),
        ],
    },
    BundledQuestion {
        id: 39,
        category: "Teamwork",
        prompt: "How well do you collaborate with diverse team members?",
        options: [
            ("Prefer working alone", 1),
            ("Work with similar people only", 2),
            ("Collaborate well with most", 3),
            ("Thrive in diverse teams", 4),
        ],
    },
    BundledQuestion {
        id: 40,
        category: "Teamwork",
        prompt: "How do you contribute to team discussions?",
        options: [
            ("Rarely participate", 1),
            ("Contribute minimally", 2),
            ("Active participant", 3),
            ("Drive meaningful discussions", 4),
        ],
    },
    BundledQuestion {
        id: 41,
        category: "Teamwork",
        prompt: "How well do you support team members who are struggling?",
        options: [
            ("Focus on my work only", 1),
            ("Help if asked", 2),
            ("Proactively offer help", 3),
            ("Mentor and support actively", 4),
        ],
    },
    BundledQuestion {
        id: 42,
        category: "Teamwork",
        prompt: "How do you handle disagreements within the team?",
        options: [
            ("Create more conflict", 1),
            ("Stay silent", 2),
            ("Express views respectfully", 3),
            ("Facilitate consensus", 4),
        ],
    },
    BundledQuestion {
        id: 43,
        category: "Teamwork",
        prompt: "How well do you share credit for team achievements?",
        options: [
            ("Take credit myself", 1),
            ("Acknowledge some contributions", 2),
            ("Share credit fairly", 3),
            ("Highlight others' contributions", 4),
        ],
    },
    BundledQuestion {
        id: 44,
        category: "Teamwork",
        prompt: "How reliable are you in meeting team commitments?",
        options: [
            ("Often miss deadlines", 1),
            ("Sometimes late", 2),
            ("Usually reliable", 3),
            ("Always dependable", 4),
        ],
    },
    BundledQuestion {
        id: 45,
        category: "Teamwork",
        prompt: "How well do you adapt to different team roles?",
        options: [
            ("Inflexible with roles", 1),
            ("Prefer specific roles", 2),
            ("Adapt to needed roles", 3),
            ("Excel in any role", 4),
        ],
    },
    BundledQuestion {
        id: 46,
        category: "Teamwork",
        prompt: "How do you contribute to team morale?",
        options: [
            ("Bring negativity", 1),
            ("Neutral presence", 2),
            ("Positive contributor", 3),
            ("Boost team spirit actively", 4),
        ],
    },
    BundledQuestion {
        id: 47,
        category: "Teamwork",
        prompt: "How well do you give constructive feedback to teammates?",
        options: [
            ("Never provide feedback", 1),
            ("Give critical feedback only", 2),
            ("Provide balanced feedback", 3),
            ("Excel at constructive feedback", 4),
        ],
    },
    BundledQuestion {
        id: 48,
        category: "Teamwork",
        prompt: "How do you handle team members who don't pull their weight?",
        options: [
            ("Complain or ignore", 1),
            ("Do their work myself", 2),
            ("Address issue diplomatically", 3),
            ("Coach and support improvement", 4),
        ],
    },
    BundledQuestion {
        id: 49,
        category: "Teamwork",
        prompt: "How well do you build trust within your team?",
        options: [
            ("Trust issues common", 1),
            ("Basic trust level", 2),
            ("Build good trust", 3),
            ("Create strong, trusting bonds", 4),
        ],
    },
    BundledQuestion {
        id: 50,
        category: "Teamwork",
        prompt: "How effectively do you celebrate team successes?",
        options: [
            ("Don't celebrate", 1),
            ("Minimal acknowledgment", 2),
            ("Celebrate appropriately", 3),
            ("Create memorable celebrations", 4),
        ],
    },
];
