//! Static copy for the page. Every section renders straight from these tables.

use crate::components::icons::IconKind;

pub const NAV_ITEMS: [&str; 5] = ["Strategy", "Performance", "Testimonials", "About", "Contact"];

pub struct Stat {
  pub icon: IconKind,
  pub value: &'static str,
  pub label: &'static str,
}

pub const HERO_STATS: [Stat; 4] = [
  Stat { icon: IconKind::TrendingUp, value: "87%", label: "Win Rate" },
  Stat { icon: IconKind::BarChart, value: "53.2K", label: "Trades" },
  Stat { icon: IconKind::Percent, value: "26%", label: "Avg. Return" },
  Stat { icon: IconKind::DollarSign, value: "2.8M", label: "AUM" },
];

pub struct Strategy {
  pub title: &'static str,
  pub description: &'static str,
  pub icon: IconKind,
}

pub const STRATEGIES: [Strategy; 6] = [
  Strategy {
    title: "Data-Driven Analysis",
    description: "Utilize machine learning algorithms to identify patterns and market inefficiencies for strategic advantage.",
    icon: IconKind::BarChart3,
  },
  Strategy {
    title: "Risk Management",
    description: "Implement strict position sizing and stop-loss protocols to protect capital and optimize risk-reward ratios.",
    icon: IconKind::Shield,
  },
  Strategy {
    title: "Technical Precision",
    description: "Apply advanced technical analysis with proprietary indicators for precise entry and exit positions.",
    icon: IconKind::Target,
  },
  Strategy {
    title: "Trend Identification",
    description: "Identify macro market trends and align trades with dominant market forces for increased probability.",
    icon: IconKind::TrendingUp,
  },
  Strategy {
    title: "Volatility Exploitation",
    description: "Capitalize on market volatility with adaptive strategies that thrive in changing market conditions.",
    icon: IconKind::BarChart,
  },
  Strategy {
    title: "Market Psychology",
    description: "Recognize common market sentiment patterns and position ahead of retail investor behavior.",
    icon: IconKind::Eye,
  },
];

pub const FRAMEWORK_POINTS: [&str; 5] = [
  "Algorithmic pattern recognition",
  "Multi-timeframe confirmation",
  "Advanced risk-reward optimization",
  "Volatility-adjusted position sizing",
  "Counter-trend opportunity identification",
];

pub struct Metric {
  pub title: &'static str,
  pub value: &'static str,
  pub change: &'static str,
  pub is_positive: bool,
  pub icon: IconKind,
}

pub const METRICS: [Metric; 4] = [
  Metric { title: "Win Rate", value: "78.3%", change: "+5.2%", is_positive: true, icon: IconKind::TrendingUp },
  Metric { title: "Profit Factor", value: "3.2", change: "+0.4", is_positive: true, icon: IconKind::BarChart4 },
  Metric { title: "Average Win", value: "$1,842", change: "+$326", is_positive: true, icon: IconKind::ArrowUpRight },
  // a smaller average loss is an improvement
  Metric { title: "Average Loss", value: "$485", change: "-$72", is_positive: true, icon: IconKind::ArrowDownRight },
];

pub const PERFORMANCE_SUMMARY: [(&str, &str); 4] = [
  ("Total Trades", "1,253"),
  ("Winning Trades", "981"),
  ("Total Profit", "$253,842"),
  ("Max Drawdown", "7.2%"),
];

pub struct Testimonial {
  pub content: &'static str,
  pub author: &'static str,
  pub position: &'static str,
  pub image: &'static str,
}

pub const TESTIMONIALS: [Testimonial; 4] = [
  Testimonial {
    content: "Working with this trading strategy has completely transformed my approach to the markets. The systematic methodology eliminated my emotional trading and has led to consistent returns month after month.",
    author: "Sarah Johnson",
    position: "Retail Trader, 3 years",
    image: "https://images.pexels.com/photos/774909/pexels-photo-774909.jpeg?auto=compress&cs=tinysrgb&w=150",
  },
  Testimonial {
    content: "I've been trading for over a decade and tried countless systems. This strategy stands out for its simplicity and effectiveness. The risk management protocols have saved my portfolio during volatile markets.",
    author: "Michael Rodriguez",
    position: "Professional Trader, 12 years",
    image: "https://images.pexels.com/photos/220453/pexels-photo-220453.jpeg?auto=compress&cs=tinysrgb&w=150",
  },
  Testimonial {
    content: "As a fund manager, I'm always looking for an edge. This strategy has provided that consistently. The performance metrics speak for themselves, but what impresses me most is the adaptability to changing market conditions.",
    author: "Emma Chen",
    position: "Hedge Fund Manager, 8 years",
    image: "https://images.pexels.com/photos/1181686/pexels-photo-1181686.jpeg?auto=compress&cs=tinysrgb&w=150",
  },
  Testimonial {
    content: "After blowing up two trading accounts, I was ready to quit. This strategy not only saved my trading career but has allowed me to turn it into a reliable income source. The discipline it instills is invaluable.",
    author: "David Washington",
    position: "Full-time Trader, 5 years",
    image: "https://images.pexels.com/photos/2379004/pexels-photo-2379004.jpeg?auto=compress&cs=tinysrgb&w=150",
  },
];

pub const ACHIEVEMENTS: [Stat; 4] = [
  Stat { icon: IconKind::Clock, value: "15+", label: "Years Trading" },
  Stat { icon: IconKind::Users, value: "1200+", label: "Students Mentored" },
  Stat { icon: IconKind::Award, value: "26", label: "Industry Awards" },
  Stat { icon: IconKind::BookOpen, value: "3", label: "Published Books" },
];

pub const CERTIFICATIONS: [&str; 3] = ["CMT", "CQF", "Series 65"];

pub const ABOUT_PORTRAIT: &str = "https://images.pexels.com/photos/7821486/pexels-photo-7821486.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2";

pub const TRADING_HOURS: [(&str, &str); 3] = [
  ("Monday - Friday", "8:00 AM - 4:00 PM ET"),
  ("Pre-Market Analysis", "7:00 AM - 8:00 AM ET"),
  ("Post-Market Review", "4:00 PM - 5:00 PM ET"),
];

pub const SOCIAL_LINKS: [(IconKind, &str); 4] = [
  (IconKind::Twitter, "Twitter"),
  (IconKind::Linkedin, "LinkedIn"),
  (IconKind::Instagram, "Instagram"),
  (IconKind::Youtube, "YouTube"),
];

pub const QUICK_LINKS: [(&str, &str); 5] = [
  ("Trading Strategy", "#strategy"),
  ("Performance", "#performance"),
  ("Testimonials", "#testimonials"),
  ("About", "#about"),
  ("Contact", "#contact"),
];

pub const RESOURCE_LINKS: [&str; 5] = ["Trading Blog", "Market Analysis", "Trading Guides", "Webinars", "FAQs"];

pub const LEGAL_LINKS: [&str; 3] = ["Privacy Policy", "Terms of Service", "Cookie Policy"];

#[cfg(test)]
mod tests {
  use super::*;
  use crate::utils::nav::anchor_href;

  #[test]
  fn nav_and_quick_links_hit_the_same_anchors() {
    for (label, href) in QUICK_LINKS.iter().skip(1) {
      assert!(NAV_ITEMS.contains(label));
      assert_eq!(anchor_href(label), *href);
    }
  }

  #[test]
  fn carousel_has_four_testimonials() {
    assert_eq!(TESTIMONIALS.len(), 4);
    assert!(TESTIMONIALS.iter().all(|t| t.image.starts_with("https://")));
  }
}
