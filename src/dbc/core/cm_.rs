use pest::iterators::Pair;

use crate::dbc::{grammar::rules, scope::ConstructScope};
use crate::types::{
    comment::{Comment, CommentTarget},
    database::Database,
    errors::ActionError,
};

/// Decode a `CM_` comment and the object it is attached to.
/// Expected formats:
/// CM_ "Comment regarding the network";
/// CM_ BU_ <node> "text";
/// CM_ BO_ <id> "text";
/// CM_ SG_ <id> <signal> "text";
/// CM_ EV_ <name> "text";
pub(crate) fn decode(scope: &mut ConstructScope, db: &mut Database, pair: &Pair<'_, &str>) -> Result<(), ActionError> {
    let text: String = scope.phrases.pop_tail()?;

    let target_rule: Option<&str> = pair.clone().into_inner().map(|p| p.as_rule()).find(|r| {
        [
            rules::NODE_TARGET,
            rules::MESSAGE_TARGET,
            rules::SIGNAL_TARGET,
            rules::ENV_VAR_TARGET,
        ]
        .contains(r)
    });

    let target: CommentTarget = match target_rule {
        Some(rules::NODE_TARGET) => CommentTarget::Node(scope.identifiers.pop_tail()?),
        Some(rules::MESSAGE_TARGET) => CommentTarget::Message(scope.numbers.pop_tail()?.narrow("id")?),
        Some(rules::SIGNAL_TARGET) => {
            let signal: String = scope.identifiers.pop_tail()?;
            let message_id: u32 = scope.numbers.pop_tail()?.narrow("id")?;
            CommentTarget::Signal { message_id, signal }
        }
        Some(rules::ENV_VAR_TARGET) => CommentTarget::EnvironmentVariable(scope.identifiers.pop_tail()?),
        _ => CommentTarget::Network,
    };

    db.comments.push(Comment { target, text });
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::dbc::engine::tests::apply;
    use crate::dbc::grammar::rules;
    use crate::dbc::scope::ConstructScope;
    use crate::types::{comment::CommentTarget, database::Database};

    fn decode_one(text: &str) -> (CommentTarget, String) {
        let mut scope: ConstructScope = ConstructScope::default();
        let mut db: Database = Database::default();
        apply(rules::COMMENT, text, &mut scope, &mut db).unwrap();
        let comment = db.comments.pop().unwrap();
        (comment.target, comment.text)
    }

    #[test]
    fn test_decode_targets() {
        assert_eq!(
            decode_one(r#"CM_ "Comment regarding the network";"#),
            (CommentTarget::Network, "Comment regarding the network".to_string())
        );
        assert_eq!(
            decode_one(r#"CM_ BU_ NEO "Autopilot";"#),
            (CommentTarget::Node("NEO".into()), "Autopilot".to_string())
        );
        assert_eq!(
            decode_one(r#"CM_ BO_ 1160 "Steering";"#),
            (CommentTarget::Message(1160), "Steering".to_string())
        );
        assert_eq!(
            decode_one(r#"CM_ EV_ EnvKlemme15 "Ignition";"#),
            (CommentTarget::EnvironmentVariable("EnvKlemme15".into()), "Ignition".to_string())
        );
    }

    #[test]
    fn test_decode_signal_multiline() {
        let (target, text) = decode_one("CM_ SG_ 1160 DAS_steeringAngleRequest \"first line\nsecond \\\"quoted\\\"\";");
        assert_eq!(
            target,
            CommentTarget::Signal {
                message_id: 1160,
                signal: "DAS_steeringAngleRequest".into()
            }
        );
        assert_eq!(text, "first line\nsecond \"quoted\"");
    }
}
