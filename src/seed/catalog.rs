//! Fixed lookup tables the demo data is drawn from.

use crate::models::OrderStatus;

pub struct City {
    pub name: &'static str,
    pub districts: &'static [&'static str],
}

pub const CUSTOMER_NAMES: [&str; 40] = [
    "Zhang San", "Li Si", "Wang Wu", "Zhao Liu", "Qian Qi", "Sun Ba", "Zhou Jiu", "Wu Shi",
    "Zheng Shiyi", "Wang Fang", "Liu Yang", "Chen Jing", "Yang Fan", "Huang Lei", "Zhu Li",
    "Lin Feng", "He Min", "Luo Qiang", "Liang Ting", "Song Wei", "Tang Li", "Xu Gang",
    "Han Xue", "Feng Tao", "Cao Na", "Yuan Jie", "Deng Chao", "Peng Fei", "Su Min",
    "Lu Qiang", "Jiang Li", "Cai Wei", "Ding Fang", "Yu Tao", "Du Na", "Ye Gang",
    "Cheng Li", "Wei Qiang", "Xue Fang", "Lei Tao",
];

pub const PHONE_PREFIXES: [&str; 8] = ["138", "139", "186", "188", "159", "158", "157", "150"];

pub static CITIES: [City; 8] = [
    City {
        name: "Beijing",
        districts: &["Chaoyang", "Haidian", "Dongcheng", "Xicheng", "Fengtai"],
    },
    City {
        name: "Shanghai",
        districts: &["Pudong", "Huangpu", "Xuhui", "Jing'an", "Changning"],
    },
    City {
        name: "Guangzhou",
        districts: &["Tianhe", "Yuexiu", "Haizhu", "Liwan", "Baiyun"],
    },
    City {
        name: "Shenzhen",
        districts: &["Nanshan", "Futian", "Luohu", "Bao'an", "Longgang"],
    },
    City {
        name: "Hangzhou",
        districts: &["Xihu", "Shangcheng", "Xiacheng", "Jianggan", "Gongshu"],
    },
    City {
        name: "Chengdu",
        districts: &["Wuhou", "Jinjiang", "Qingyang", "Jinniu", "Chenghua"],
    },
    City {
        name: "Nanjing",
        districts: &["Gulou", "Xuanwu", "Qinhuai", "Jianye", "Yuhuatai"],
    },
    City {
        name: "Wuhan",
        districts: &["Wuchang", "Hankou", "Hanyang", "Hongshan", "Jianghan"],
    },
];

pub const STREETS: [&str; 12] = [
    "Jianguo Road",
    "Renmin Road",
    "Zhongshan Road",
    "Jiefang Road",
    "Heping Road",
    "Shengli Road",
    "Wenhua Road",
    "Guangming Road",
    "Xinhua Road",
    "Zhongguancun Street",
    "Lujiazui Ring Road",
    "Tianhe Road",
];

pub const PACKAGE_TYPES: [&str; 4] = ["Documents", "Small parcel", "Large parcel", "Fragile"];

/// Relative draw weights; they sum to 100.
pub const STATUS_WEIGHTS: [(OrderStatus, u32); 7] = [
    (OrderStatus::Pending, 5),
    (OrderStatus::PickedUp, 10),
    (OrderStatus::InTransit, 30),
    (OrderStatus::OutForDelivery, 25),
    (OrderStatus::Delivered, 25),
    (OrderStatus::Failed, 3),
    (OrderStatus::Returned, 2),
];

pub fn service_point(city: &str) -> String {
    format!("{city} Service Point")
}

pub fn sorting_hub(city: &str) -> String {
    format!("{city} Sorting Hub")
}
