//! Static recipe catalog.

use crate::errors::{AppError, AppResult};
use crate::models::recipe::{Difficulty, Recipe};

static RECIPES: [Recipe; 6] = [
    Recipe {
        id: "1",
        name: "番茄鸡蛋面",
        category: "主食",
        calories: 420,
        protein: 18,
        carbs: 65,
        fat: 8,
        time: 20,
        servings: 1,
        difficulty: Difficulty::Easy,
        ingredients: &["面条 100g", "鸡蛋 2个", "番茄 2个", "葱花适量", "盐、酱油适量"],
        steps: &[
            "番茄切块，鸡蛋打散备用",
            "锅中烧水，水开后下面条煮熟",
            "另起锅热油，倒入蛋液炒散盛出",
            "锅中加油炒番茄至软烂，加入炒好的鸡蛋",
            "加入适量水煮开，加盐和酱油调味",
            "将煮好的面条捞出放入碗中，浇上番茄鸡蛋汤",
        ],
    },
    Recipe {
        id: "2",
        name: "鸡胸肉沙拉",
        category: "减脂餐",
        calories: 280,
        protein: 35,
        carbs: 15,
        fat: 6,
        time: 15,
        servings: 1,
        difficulty: Difficulty::Easy,
        ingredients: &[
            "鸡胸肉 150g",
            "生菜 100g",
            "圣女果 5个",
            "黄瓜 1根",
            "橄榄油、黑胡椒适量",
        ],
        steps: &[
            "鸡胸肉切块，用盐和黑胡椒腌制10分钟",
            "平底锅少油煎鸡胸肉至两面金黄",
            "生菜洗净撕小块，圣女果对半切，黄瓜切片",
            "将所有蔬菜和鸡胸肉混合",
            "淋上少许橄榄油和柠檬汁，撒黑胡椒调味",
        ],
    },
    Recipe {
        id: "3",
        name: "三色藜麦饭",
        category: "主食",
        calories: 350,
        protein: 12,
        carbs: 68,
        fat: 4,
        time: 30,
        servings: 2,
        difficulty: Difficulty::Easy,
        ingredients: &["三色藜麦 100g", "大米 50g", "玉米粒 50g", "青豆 30g"],
        steps: &[
            "藜麦和大米分别淘洗干净",
            "将藜麦和大米放入电饭煲，加入适量水",
            "加入玉米粒和青豆",
            "按下煮饭键，煮熟后焖5分钟",
            "开盖搅拌均匀即可",
        ],
    },
    Recipe {
        id: "4",
        name: "清蒸鲈鱼",
        category: "优质蛋白",
        calories: 180,
        protein: 32,
        carbs: 2,
        fat: 5,
        time: 25,
        servings: 2,
        difficulty: Difficulty::Medium,
        ingredients: &["鲈鱼 1条", "姜片适量", "葱丝适量", "蒸鱼豉油 2勺", "料酒 1勺"],
        steps: &[
            "鲈鱼处理干净，在鱼身两侧划几刀",
            "在鱼身和鱼腹内放入姜片，淋上料酒腌制10分钟",
            "蒸锅水开后放入鱼，大火蒸8-10分钟",
            "取出鱼，倒掉盘中的汤汁",
            "撒上葱丝，淋上热油和蒸鱼豉油",
        ],
    },
    Recipe {
        id: "5",
        name: "燕麦香蕉松饼",
        category: "早餐",
        calories: 320,
        protein: 14,
        carbs: 48,
        fat: 8,
        time: 15,
        servings: 1,
        difficulty: Difficulty::Easy,
        ingredients: &["燕麦片 50g", "香蕉 1根", "鸡蛋 1个", "牛奶 50ml", "蜂蜜适量"],
        steps: &[
            "香蕉捣成泥，加入鸡蛋和牛奶搅拌均匀",
            "加入燕麦片，搅拌成面糊",
            "平底锅小火加热，倒入一勺面糊",
            "煎至两面金黄，约2分钟一面",
            "装盘后淋上蜂蜜即可",
        ],
    },
    Recipe {
        id: "6",
        name: "香菇炖鸡汤",
        category: "汤品",
        calories: 220,
        protein: 28,
        carbs: 8,
        fat: 6,
        time: 90,
        servings: 4,
        difficulty: Difficulty::Medium,
        ingredients: &[
            "鸡腿 4个",
            "干香菇 10朵",
            "红枣 6颗",
            "枸杞适量",
            "姜片适量",
            "盐适量",
        ],
        steps: &[
            "鸡腿洗净焯水去血沫",
            "干香菇提前泡发",
            "将所有食材放入炖锅",
            "加入足量清水，大火煮开后转小火",
            "炖煮1.5小时至鸡肉软烂",
            "加盐调味即可",
        ],
    },
];

pub fn all() -> &'static [Recipe] {
    &RECIPES
}

pub fn find(id: &str) -> AppResult<&'static Recipe> {
    RECIPES
        .iter()
        .find(|r| r.id == id.trim())
        .ok_or_else(|| AppError::RecipeNotFound(id.to_string()))
}

pub fn by_category(category: &str) -> Vec<&'static Recipe> {
    RECIPES
        .iter()
        .filter(|r| r.category == category.trim())
        .collect()
}

/// Distinct categories in catalog order.
pub fn categories() -> Vec<&'static str> {
    let mut out: Vec<&'static str> = Vec::new();
    for r in &RECIPES {
        if !out.contains(&r.category) {
            out.push(r.category);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_six_recipes_with_unique_ids() {
        let ids: Vec<_> = all().iter().map(|r| r.id).collect();
        assert_eq!(ids, ["1", "2", "3", "4", "5", "6"]);
    }

    #[test]
    fn find_and_filter() {
        assert_eq!(find("4").unwrap().name, "清蒸鲈鱼");
        assert!(matches!(find("42"), Err(AppError::RecipeNotFound(_))));

        let staples: Vec<_> = by_category("主食").iter().map(|r| r.name).collect();
        assert_eq!(staples, ["番茄鸡蛋面", "三色藜麦饭"]);
        assert!(by_category("甜品").is_empty());
    }

    #[test]
    fn categories_keep_first_seen_order() {
        assert_eq!(categories(), ["主食", "减脂餐", "优质蛋白", "早餐", "汤品"]);
    }
}
