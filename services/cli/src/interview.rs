//! Line-oriented questionnaire over any reader/writer pair.

use std::io::{self, BufRead, Write};

use claisen::triage::{
    next_question, AnswerError, AnswerSet, AnswerValue, QuestionKind, QuestionSpec,
    QuestionnaireMode, QuickSymptom,
};
use tracing::warn;

pub struct Interview<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Interview<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Ask every visible question of `mode` until none remain. Rejected answers are re-asked.
    pub fn collect(&mut self, mode: QuestionnaireMode) -> io::Result<AnswerSet> {
        let mut answers = AnswerSet::new();
        while let Some(question) = next_question(mode, &answers) {
            self.ask(question, &mut answers)?;
        }
        Ok(answers)
    }

    /// Optional free-text notes; a blank line means none.
    pub fn notes(&mut self) -> io::Result<Option<String>> {
        writeln!(
            self.output,
            "\nAnything else about your symptoms? (press Enter to skip)"
        )?;
        let line = self.read_line()?;
        Ok((!line.is_empty()).then_some(line))
    }

    pub fn quick_symptoms(&mut self) -> io::Result<Vec<QuickSymptom>> {
        let labels: Vec<&str> = QuickSymptom::ALL.iter().map(|symptom| symptom.label()).collect();
        writeln!(
            self.output,
            "Which symptoms do you have today? ({}; blank for none)",
            labels.join(", ")
        )?;
        let line = self.read_line()?;
        Ok(QuickSymptom::parse_list(&line))
    }

    fn ask(&mut self, question: &QuestionSpec, answers: &mut AnswerSet) -> io::Result<()> {
        loop {
            self.prompt(question)?;
            let line = self.read_line()?;
            match answers.record(question.id, parse_reply(question, &line)) {
                Ok(()) => return Ok(()),
                Err(err @ AnswerError::InvalidAnswer { .. }) => {
                    warn!(question = question.id, error = %err, "answer rejected");
                    writeln!(self.output, "Sorry, that answer was not accepted: {err}")?;
                }
                Err(
                    err @ (AnswerError::UnknownQuestion(_) | AnswerError::NotApplicable { .. }),
                ) => {
                    return Err(io::Error::new(io::ErrorKind::InvalidData, err));
                }
            }
        }
    }

    fn prompt(&mut self, question: &QuestionSpec) -> io::Result<()> {
        writeln!(self.output, "\n{}", question.prompt)?;
        for (index, option) in question.options.iter().enumerate() {
            writeln!(self.output, "  {}. {}", index + 1, option)?;
        }
        let hint = match question.kind {
            QuestionKind::FreeText => "your answer",
            QuestionKind::Integer => "a whole number",
            QuestionKind::SingleChoice => "option number",
            QuestionKind::MultiChoice => "option numbers separated by commas, blank for none",
        };
        write!(self.output, "[{hint}] > ")?;
        self.output.flush()
    }

    fn read_line(&mut self) -> io::Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input ended before the questionnaire was complete",
            ));
        }
        Ok(line.trim().to_string())
    }
}

/// Translate a typed reply into a candidate value. Option numbers map to option text;
/// anything else is passed through and left to validation.
fn parse_reply(question: &QuestionSpec, line: &str) -> AnswerValue {
    match question.kind {
        QuestionKind::FreeText | QuestionKind::Integer => AnswerValue::Text(line.to_string()),
        QuestionKind::SingleChoice => AnswerValue::Text(option_for(question, line)),
        QuestionKind::MultiChoice => AnswerValue::choices(
            line.split(',')
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(|item| option_for(question, item)),
        ),
    }
}

fn option_for(question: &QuestionSpec, reply: &str) -> String {
    reply
        .parse::<usize>()
        .ok()
        .and_then(|number| number.checked_sub(1))
        .and_then(|index| question.options.get(index))
        .map_or_else(|| reply.to_string(), |option| option.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use claisen::triage::{find_question, questions_for};
    use std::io::Cursor;

    fn question(id: &str) -> &'static QuestionSpec {
        find_question(id).expect("question in catalog")
    }

    #[test]
    fn option_numbers_map_to_option_text() {
        let gender = question("demographics_gender");
        assert_eq!(
            parse_reply(gender, "2"),
            AnswerValue::Text(gender.options[1].to_string())
        );
        assert_eq!(parse_reply(gender, "0"), AnswerValue::Text("0".into()));
        assert_eq!(parse_reply(gender, "99"), AnswerValue::Text("99".into()));
    }

    #[test]
    fn multi_choice_replies_become_choice_sets() {
        let meds = question("meds_reflux");
        let reply = parse_reply(meds, "1, 2,,");
        assert_eq!(
            reply,
            AnswerValue::choices([meds.options[0], meds.options[1]])
        );
        assert_eq!(parse_reply(meds, ""), AnswerValue::choices(Vec::<String>::new()));
    }

    #[test]
    fn follow_up_session_reasks_rejected_answers() {
        let follow_up: Vec<&QuestionSpec> = questions_for(QuestionnaireMode::FollowUp).collect();
        let mut script = String::new();
        for spec in &follow_up {
            if spec.kind == QuestionKind::SingleChoice {
                script.push_str("0\n");
            }
            script.push_str(match spec.kind {
                QuestionKind::Integer => "3\n",
                QuestionKind::MultiChoice | QuestionKind::SingleChoice => "1\n",
                QuestionKind::FreeText => "feeling better\n",
            });
        }

        let mut transcript = Vec::new();
        let answers = Interview::new(Cursor::new(script), &mut transcript)
            .collect(QuestionnaireMode::FollowUp)
            .expect("session completes");

        assert_eq!(answers.len(), follow_up.len());
        let transcript = String::from_utf8(transcript).expect("utf8");
        let single_choice = follow_up
            .iter()
            .filter(|spec| spec.kind == QuestionKind::SingleChoice)
            .count();
        assert_eq!(transcript.matches("was not accepted").count(), single_choice);
    }

    #[test]
    fn pregnancy_question_is_only_asked_of_female_respondents() {
        let mut transcript = Vec::new();
        let mut interview = Interview::new(Cursor::new("34\nMale\n"), &mut transcript);
        let mut answers = AnswerSet::new();

        interview
            .ask(question("demographics_age"), &mut answers)
            .expect("age recorded");
        interview
            .ask(question("demographics_gender"), &mut answers)
            .expect("gender recorded");

        assert_eq!(answers.get("demographics_age"), Some(&AnswerValue::Integer(34)));
        let next = next_question(QuestionnaireMode::Initial, &answers).expect("more questions");
        assert_ne!(next.id, "demographics_pregnant");
    }

    #[test]
    fn running_out_of_input_is_an_error() {
        let mut sink = Vec::new();
        let err = Interview::new(Cursor::new(""), &mut sink)
            .collect(QuestionnaireMode::Initial)
            .expect_err("no input");
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn blank_notes_are_none() {
        let mut sink = Vec::new();
        let mut interview = Interview::new(Cursor::new("\n  heartburn at night \n"), &mut sink);
        assert_eq!(interview.notes().expect("reads"), None);
        assert_eq!(
            interview.notes().expect("reads").as_deref(),
            Some("heartburn at night")
        );
    }
}
