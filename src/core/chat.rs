//! Canned-response diet assistant.
//!
//! Replies come from a fixed keyword table; only the fallback is random.

use crate::errors::{AppError, AppResult};
use crate::models::message::{ChatImage, ChatMessage, Role};
use clap::ValueEnum;
use rand::Rng;
use rand::seq::SliceRandom;
use std::fs;
use std::path::Path;
use std::thread;
use std::time::Duration;

pub const WELCOME: &str = "您好！我是您的饮食健康助手。您可以：\n\n• 拍照识别食物\n• 咨询饮食建议\n• 了解营养知识\n• 获取食谱推荐\n\n请问有什么可以帮您的吗？";

pub const IMAGE_REPLY: &str = "我看到您分享了一张食物照片。这看起来像是健康的一餐！\n\n根据图片，我建议：\n• 注意食物的分量控制\n• 搭配适量蔬菜\n• 注意烹饪方式，建议少油少盐\n\n如果您想了解具体的营养成分，可以在\"饮食记录\"中手动添加详细信息。";

pub const IMAGE_PROMPT: &str = "我拍了张食物照片";

const WEIGHT_LOSS_REPLY: &str = "关于健康减脂，我建议：\n\n1. 控制热量摄入，每日减少300-500kcal\n2. 保持蛋白质摄入，每公斤体重1.6-2g\n3. 选择低GI碳水，如糙米、燕麦\n4. 增加蔬菜摄入量，每餐至少一半是蔬菜\n5. 配合适量运动，每周3-5次\n\n建议查看\"食谱推荐\"中的减脂餐选项！";

const BREAKFAST_REPLY: &str = "健康早餐建议：\n\n碳水：全麦面包、燕麦、杂粮粥\n蛋白质：鸡蛋、牛奶、豆浆\n维生素：水果、蔬菜\n\n推荐搭配：\n• 燕麦 + 鸡蛋 + 香蕉\n• 全麦面包 + 牛奶 + 水果\n• 杂粮粥 + 鸡蛋 + 青菜\n\n早餐应占全天热量的25-30%哦！";

const PROTEIN_REPLY: &str = "优质蛋白质来源：\n\n动物性蛋白：\n• 鸡胸肉、瘦牛肉（蛋白质含量高）\n• 鱼类（富含Omega-3）\n• 鸡蛋（完全蛋白）\n\n植物性蛋白：\n• 豆腐、豆浆\n• 藜麦\n• 坚果类\n\n成年人每日推荐摄入量：每公斤体重0.8-1g";

const WATER_REPLY: &str = "每日饮水建议：\n\n成年人每日推荐饮水量：1500-2000ml\n\n最佳饮水时间：\n• 早晨起床后 250ml\n• 三餐前30分钟 200ml\n• 运动后及时补充\n• 睡前1小时 少量\n\n注意：\n避免一次性大量饮水，少量多次为宜。";

/// Keyword sets in priority order; the first set with a hit wins.
const KEYWORD_REPLIES: &[(&[&str], &str)] = &[
    (&["减肥", "减脂"], WEIGHT_LOSS_REPLY),
    (&["早餐", "breakfast"], BREAKFAST_REPLY),
    (&["蛋白质", "protein"], PROTEIN_REPLY),
    (&["水", "喝"], WATER_REPLY),
];

pub const FALLBACK_REPLIES: [&str; 4] = [
    "这是个很好的问题！根据营养学原理，建议您保持饮食多样化，每天摄入12种以上食物。",
    "我理解您的关注。建议您在\"营养分析\"标签查看您的营养摄入情况，我会根据数据给出更精准的建议。",
    "关于这个问题，建议您咨询专业营养师获取个性化方案。我可以为您提供一般性的营养建议作为参考。",
    "您可以在\"食谱推荐\"中找到适合的健康食谱，都是经过营养配比的哦！",
];

pub const HEALTH_TIPS: [&str; 5] = [
    "作为您的健康管家，我建议您保持规律的作息时间，这对整体健康非常重要。",
    "根据您的情况，建议每天保持适量运动，比如散步30分钟。",
    "保持良好的心态对健康很重要，建议您多参与一些放松身心的活动。",
    "充足的睡眠是健康的基础，建议每晚保持7-8小时的睡眠时间。",
    "定期体检可以帮助及早发现健康问题，建议您每年进行一次全面体检。",
];

/// Which assistant answers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, ValueEnum)]
pub enum Persona {
    /// Diet assistant: keyword advice and photo acknowledgement
    #[default]
    Diet,
    /// General health tips, always picked at random
    Health,
}

pub fn respond(text: &str, has_image: bool) -> &'static str {
    respond_with(text, has_image, &mut rand::thread_rng())
}

pub fn respond_with<R: Rng + ?Sized>(text: &str, has_image: bool, rng: &mut R) -> &'static str {
    if has_image {
        return IMAGE_REPLY;
    }

    let lower = text.to_lowercase();
    KEYWORD_REPLIES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(_, reply)| *reply)
        .unwrap_or_else(|| pick(&FALLBACK_REPLIES, rng))
}

pub fn health_tip<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    pick(&HEALTH_TIPS, rng)
}

fn pick<R: Rng + ?Sized>(choices: &[&'static str], rng: &mut R) -> &'static str {
    // choices are non-empty constants
    choices.choose(rng).copied().unwrap_or_default()
}

/// MIME type guessed from the file extension.
pub fn guess_mime(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        "svg" => "image/svg+xml",
        "heic" => "image/heic",
        "avif" => "image/avif",
        "tif" | "tiff" => "image/tiff",
        "txt" => "text/plain",
        "pdf" => "application/pdf",
        "json" => "application/json",
        _ => "application/octet-stream",
    }
}

/// One chat session; the history lives only as long as the process.
pub struct ChatSession {
    persona: Persona,
    messages: Vec<ChatMessage>,
    text_delay: Duration,
    image_delay: Duration,
    seq: u64,
}

impl ChatSession {
    pub fn new(persona: Persona, text_delay: Duration, image_delay: Duration) -> Self {
        let mut session = Self {
            persona,
            messages: Vec::new(),
            text_delay,
            image_delay,
            seq: 0,
        };
        if persona == Persona::Diet {
            session.messages.push(ChatMessage::new("welcome", Role::Assistant, WELCOME));
        }
        session
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn persona(&self) -> Persona {
        self.persona
    }

    /// Send a text question. Blank input is ignored and yields `None`.
    pub fn send(&mut self, text: &str) -> Option<&ChatMessage> {
        if text.trim().is_empty() {
            return None;
        }

        let user = ChatMessage::new(self.next_id(), Role::User, text);
        self.messages.push(user);

        thread::sleep(self.text_delay);

        let reply = match self.persona {
            Persona::Diet => respond(text, false),
            Persona::Health => health_tip(&mut rand::thread_rng()),
        };
        self.push_reply(reply)
    }

    /// Send a food photo, optionally captioned. Non-image files are
    /// rejected before anything is appended to the history. The caption
    /// never changes the reply.
    pub fn send_image(&mut self, path: &Path, caption: Option<&str>) -> AppResult<&ChatMessage> {
        let mime = guess_mime(path);
        if !mime.starts_with("image/") {
            return Err(AppError::InvalidImage(path.display().to_string()));
        }
        let size = fs::metadata(path)?.len();

        let content = caption
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .unwrap_or(IMAGE_PROMPT);
        let user = ChatMessage::new(self.next_id(), Role::User, content).with_image(ChatImage {
            path: path.display().to_string(),
            mime,
            size,
        });
        self.messages.push(user);

        thread::sleep(self.image_delay);

        self.push_reply(respond("", true))
            .ok_or_else(|| AppError::Other("reply not recorded".into()))
    }

    fn push_reply(&mut self, reply: &str) -> Option<&ChatMessage> {
        let msg = ChatMessage::new(self.next_id(), Role::Assistant, reply);
        self.messages.push(msg);
        self.messages.last()
    }

    fn next_id(&mut self) -> String {
        self.seq += 1;
        self.seq.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::env;

    fn session() -> ChatSession {
        ChatSession::new(Persona::Diet, Duration::ZERO, Duration::ZERO)
    }

    #[test]
    fn weight_loss_question_gets_fixed_block() {
        assert_eq!(respond("我想减肥", false), WEIGHT_LOSS_REPLY);
        assert_eq!(respond("怎么减脂比较快", false), WEIGHT_LOSS_REPLY);
    }

    #[test]
    fn keyword_priority_order() {
        // weight loss beats breakfast, breakfast beats protein, protein beats water
        assert_eq!(respond("减肥早餐吃什么", false), WEIGHT_LOSS_REPLY);
        assert_eq!(respond("早餐要多少蛋白质", false), BREAKFAST_REPLY);
        assert_eq!(respond("喝蛋白质粉", false), PROTEIN_REPLY);
        assert_eq!(respond("每天喝多少", false), WATER_REPLY);
    }

    #[test]
    fn english_keywords_are_case_insensitive() {
        assert_eq!(respond("Ideas for BREAKFAST?", false), BREAKFAST_REPLY);
        assert_eq!(respond("More Protein please", false), PROTEIN_REPLY);
    }

    #[test]
    fn image_flag_wins_over_text() {
        assert_eq!(respond("我想减肥", true), IMAGE_REPLY);
    }

    #[test]
    fn unmatched_input_falls_back_to_one_of_four() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let r = respond_with("今天天气如何", false, &mut rng);
            assert!(FALLBACK_REPLIES.contains(&r));
        }
    }

    #[test]
    fn health_persona_only_gives_tips() {
        let mut s = ChatSession::new(Persona::Health, Duration::ZERO, Duration::ZERO);
        assert!(s.messages().is_empty());
        let reply = s.send("我想减肥").unwrap().content.clone();
        assert!(HEALTH_TIPS.contains(&reply.as_str()));
    }

    #[test]
    fn session_appends_user_and_assistant() {
        let mut s = session();
        assert_eq!(s.messages().len(), 1);

        let reply = s.send("早餐吃什么").unwrap();
        assert_eq!(reply.role, Role::Assistant);
        assert_eq!(reply.content, BREAKFAST_REPLY);

        let roles: Vec<_> = s.messages().iter().map(|m| m.role).collect();
        assert_eq!(roles, [Role::Assistant, Role::User, Role::Assistant]);
    }

    #[test]
    fn blank_input_is_ignored() {
        let mut s = session();
        assert!(s.send("   ").is_none());
        assert_eq!(s.messages().len(), 1);
    }

    #[test]
    fn non_image_upload_is_rejected() {
        let mut s = session();
        let err = s.send_image(Path::new("menu.pdf"), None).unwrap_err();
        assert!(matches!(err, AppError::InvalidImage(_)));
        assert_eq!(s.messages().len(), 1);
    }

    #[test]
    fn image_upload_is_acknowledged() {
        let mut path = env::temp_dir();
        path.push("rdietlogger_chat_test_lunch.jpg");
        fs::write(&path, b"\xFF\xD8\xFF").unwrap();

        let mut s = session();
        let reply = s.send_image(&path, None).unwrap().content.clone();
        assert_eq!(reply, IMAGE_REPLY);

        let user = &s.messages()[1];
        assert_eq!(user.content, IMAGE_PROMPT);
        let img = user.image.as_ref().unwrap();
        assert_eq!(img.mime, "image/jpeg");
        assert_eq!(img.size, 3);

        fs::remove_file(&path).ok();
    }

    #[test]
    fn caption_is_kept_but_reply_stays_image_ack() {
        let mut path = env::temp_dir();
        path.push("rdietlogger_chat_test_caption.png");
        fs::write(&path, b"\x89PNG").unwrap();

        let mut s = session();
        let reply = s.send_image(&path, Some("我想减肥")).unwrap().content.clone();
        assert_eq!(reply, IMAGE_REPLY);

        // one photo message and one reply, no second question
        assert_eq!(s.messages().len(), 3);
        assert_eq!(s.messages()[1].content, "我想减肥");
        assert!(s.messages()[1].image.is_some());

        fs::remove_file(&path).ok();
    }

    #[test]
    fn mime_guess() {
        assert_eq!(guess_mime(Path::new("a.PNG")), "image/png");
        assert_eq!(guess_mime(Path::new("noext")), "application/octet-stream");
    }
}
