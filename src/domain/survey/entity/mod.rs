pub mod question_bank;
pub mod survey;
pub mod survey_question;
pub mod survey_response;
