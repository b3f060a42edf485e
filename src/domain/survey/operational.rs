//! 운영 설문 (고정 8문항)
//!
//! 식당 품질 표준 항목을 하나씩 다루며, 문항 은행 초기 데이터로도 사용됩니다.

/// 운영 설문 문항 수
pub const OPERATIONAL_QUESTION_COUNT: usize = 8;

/// 직접 구성 설문에서 카테고리를 지정하지 않았을 때의 기본값
pub const DEFAULT_CATEGORY: &str = "GENERAL";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedQuestion {
    pub question: &'static str,
    pub option_left: &'static str,
    pub option_right: &'static str,
    pub category: &'static str,
}

const OPERATIONAL_QUESTIONS: [FixedQuestion; OPERATIONAL_QUESTION_COUNT] = [
    FixedQuestion {
        question: "음식 맛은 어떠셨나요?",
        option_left: "맛있었어요",
        option_right: "아쉬웠어요",
        category: "FOOD",
    },
    FixedQuestion {
        question: "직원 응대는 친절했나요?",
        option_left: "친절했어요",
        option_right: "불친절했어요",
        category: "SERVICE",
    },
    FixedQuestion {
        question: "음식이 빨리 나왔나요?",
        option_left: "빨랐어요",
        option_right: "느렸어요",
        category: "SPEED",
    },
    FixedQuestion {
        question: "매장은 청결했나요?",
        option_left: "깨끗했어요",
        option_right: "지저분했어요",
        category: "CLEANLINESS",
    },
    FixedQuestion {
        question: "가격은 적당했나요?",
        option_left: "적당했어요",
        option_right: "비쌌어요",
        category: "VALUE",
    },
    FixedQuestion {
        question: "매장 분위기는 어떠셨나요?",
        option_left: "좋았어요",
        option_right: "별로였어요",
        category: "AMBIENCE",
    },
    FixedQuestion {
        question: "주문한 메뉴가 정확히 나왔나요?",
        option_left: "정확했어요",
        option_right: "틀렸어요",
        category: "ACCURACY",
    },
    FixedQuestion {
        question: "다시 방문하실 의향이 있나요?",
        option_left: "있어요",
        option_right: "없어요",
        category: "LOYALTY",
    },
];

/// 운영 설문 문항 목록
pub fn operational_questions() -> &'static [FixedQuestion] {
    &OPERATIONAL_QUESTIONS
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn should_have_eight_questions() {
        assert_eq!(operational_questions().len(), 8);
    }

    #[test]
    fn questions_and_categories_should_be_unique() {
        let questions: HashSet<_> = operational_questions().iter().map(|q| q.question).collect();
        let categories: HashSet<_> = operational_questions().iter().map(|q| q.category).collect();

        assert_eq!(questions.len(), OPERATIONAL_QUESTION_COUNT);
        assert_eq!(categories.len(), OPERATIONAL_QUESTION_COUNT);
    }

    #[test]
    fn options_should_differ_per_question() {
        for q in operational_questions() {
            assert_ne!(q.option_left, q.option_right, "{}", q.question);
        }
    }
}
