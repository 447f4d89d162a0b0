//! Built-in shortcode table
//!
//! A curated subset of the chat shortcodes, in display order.

pub(super) const BUILTIN: &[(&str, &str)] = &[
    ("grinning", "😀"),
    ("smiley", "😃"),
    ("smile", "😄"),
    ("grin", "😁"),
    ("laughing", "😆"),
    ("sweat_smile", "😅"),
    ("joy", "😂"),
    ("rofl", "🤣"),
    ("slightly_smiling_face", "🙂"),
    ("upside_down_face", "🙃"),
    ("wink", "😉"),
    ("blush", "😊"),
    ("innocent", "😇"),
    ("heart_eyes", "😍"),
    ("star_struck", "🤩"),
    ("kissing_heart", "😘"),
    ("yum", "😋"),
    ("stuck_out_tongue", "😛"),
    ("stuck_out_tongue_winking_eye", "😜"),
    ("zany_face", "🤪"),
    ("money_mouth_face", "🤑"),
    ("hugging_face", "🤗"),
    ("thinking_face", "🤔"),
    ("zipper_mouth_face", "🤐"),
    ("neutral_face", "😐"),
    ("expressionless", "😑"),
    ("no_mouth", "😶"),
    ("smirk", "😏"),
    ("unamused", "😒"),
    ("face_with_rolling_eyes", "🙄"),
    ("grimacing", "😬"),
    ("relieved", "😌"),
    ("pensive", "😔"),
    ("sleepy", "😪"),
    ("sleeping", "😴"),
    ("mask", "😷"),
    ("nerd_face", "🤓"),
    ("sunglasses", "😎"),
    ("confused", "😕"),
    ("worried", "😟"),
    ("slightly_frowning_face", "🙁"),
    ("open_mouth", "😮"),
    ("astonished", "😲"),
    ("flushed", "😳"),
    ("pleading_face", "🥺"),
    ("cry", "😢"),
    ("sob", "😭"),
    ("scream", "😱"),
    ("confounded", "😖"),
    ("disappointed", "😞"),
    ("sweat", "😓"),
    ("weary", "😩"),
    ("yawning_face", "🥱"),
    ("triumph", "😤"),
    ("rage", "😡"),
    ("angry", "😠"),
    ("skull", "💀"),
    ("poop", "💩"),
    ("clown_face", "🤡"),
    ("ghost", "👻"),
    ("alien", "👽"),
    ("robot_face", "🤖"),
    ("smiley_cat", "😺"),
    ("see_no_evil", "🙈"),
    ("wave", "👋"),
    ("ok_hand", "👌"),
    ("v", "✌️"),
    ("crossed_fingers", "🤞"),
    ("+1", "👍"),
    ("-1", "👎"),
    ("clap", "👏"),
    ("raised_hands", "🙌"),
    ("pray", "🙏"),
    ("muscle", "💪"),
    ("eyes", "👀"),
    ("brain", "🧠"),
    ("heart", "❤️"),
    ("orange_heart", "🧡"),
    ("yellow_heart", "💛"),
    ("green_heart", "💚"),
    ("blue_heart", "💙"),
    ("purple_heart", "💜"),
    ("broken_heart", "💔"),
    ("sparkling_heart", "💖"),
    ("100", "💯"),
    ("boom", "💥"),
    ("zzz", "💤"),
    ("fire", "🔥"),
    ("sparkles", "✨"),
    ("star", "⭐"),
    ("zap", "⚡"),
    ("rainbow", "🌈"),
    ("sunny", "☀️"),
    ("snowflake", "❄️"),
    ("coffee", "☕"),
    ("beer", "🍺"),
    ("pizza", "🍕"),
    ("cake", "🍰"),
    ("tada", "🎉"),
    ("gift", "🎁"),
    ("trophy", "🏆"),
    ("rocket", "🚀"),
    ("bulb", "💡"),
    ("memo", "📝"),
    ("lock", "🔒"),
    ("key", "🔑"),
    ("hammer", "🔨"),
    ("wrench", "🔧"),
    ("bug", "🐛"),
    ("dog", "🐶"),
    ("cat", "🐱"),
    ("crab", "🦀"),
    ("snake", "🐍"),
    ("white_check_mark", "✅"),
    ("x", "❌"),
    ("warning", "⚠️"),
    ("question", "❓"),
    ("exclamation", "❗"),
    ("point_right", "👉"),
    ("point_up", "☝️"),
];
